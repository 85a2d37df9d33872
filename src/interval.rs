use core::cmp::Ordering;

use log::debug;

use crate::{
    bounds::{BoundType, Endpoint, LOWER, UPPER},
    error::IntervalError,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInterval<T>",
        bound(deserialize = "T: serde::Deserialize<'de> + Ord")
    )
)]
/// A contiguous subset of the values of some totally ordered `T`.
///
/// Each side is either bounded by a value (included or excluded)
/// or unbounded. Intervals are immutable: every operation
/// producing an interval returns a new value.
///
/// Equality is structural: two empty intervals anchored at different
/// points are different values.
///
/// <https://en.wikipedia.org/wiki/Interval_(mathematics)>
pub struct Interval<T> {
    lower: Endpoint<LOWER, T>,
    upper: Endpoint<UPPER, T>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval<T> {
    lower: Endpoint<LOWER, T>,
    upper: Endpoint<UPPER, T>,
}

#[cfg(feature = "serde")]
impl<T: Ord> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(RawInterval { lower, upper }: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::from_endpoints(lower, upper)
    }
}

impl<T> Interval<T> {
    /// The set of values strictly greater than `lower`: `(lower, +inf)`.
    pub const fn greater_than(lower: T) -> Self {
        Self {
            lower: Endpoint::Excluded(lower),
            upper: Endpoint::Infinite,
        }
    }

    /// The set of values greater or equal than `lower`: `[lower, +inf)`.
    pub const fn at_least(lower: T) -> Self {
        Self {
            lower: Endpoint::Included(lower),
            upper: Endpoint::Infinite,
        }
    }

    /// The set of values strictly less than `upper`: `(-inf, upper)`.
    pub const fn less_than(upper: T) -> Self {
        Self {
            lower: Endpoint::Infinite,
            upper: Endpoint::Excluded(upper),
        }
    }

    /// The set of values less or equal than `upper`: `(-inf, upper]`.
    pub const fn at_most(upper: T) -> Self {
        Self {
            lower: Endpoint::Infinite,
            upper: Endpoint::Included(upper),
        }
    }

    /// Interval containing any value.
    ///
    /// <https://en.wikipedia.org/wiki/Universe_(mathematics)>
    pub const fn all() -> Self {
        Self {
            lower: Endpoint::Infinite,
            upper: Endpoint::Infinite,
        }
    }

    /// The set containing only `x`: `[x, x]`.
    pub fn singleton(x: T) -> Self
    where
        T: Clone,
    {
        Self {
            lower: Endpoint::Included(x.clone()),
            upper: Endpoint::Included(x),
        }
    }

    /// The empty interval anchored at `x`: `(x, x]`.
    fn empty_at(x: T) -> Self
    where
        T: Clone,
    {
        Self {
            lower: Endpoint::Excluded(x.clone()),
            upper: Endpoint::Included(x),
        }
    }

    /// The lower side of the interval.
    pub const fn lower(&self) -> &Endpoint<LOWER, T> {
        &self.lower
    }

    /// The upper side of the interval.
    pub const fn upper(&self) -> &Endpoint<UPPER, T> {
        &self.upper
    }

    /// The lower endpoint value, `None` when unbounded below.
    pub const fn lower_endpoint(&self) -> Option<&T> {
        self.lower.value()
    }

    /// The upper endpoint value, `None` when unbounded above.
    pub const fn upper_endpoint(&self) -> Option<&T> {
        self.upper.value()
    }

    /// Whether the lower endpoint value belongs to the interval.
    pub const fn lower_closed(&self) -> bool {
        self.lower.is_closed()
    }

    /// Whether the upper endpoint value belongs to the interval.
    pub const fn upper_closed(&self) -> bool {
        self.upper.is_closed()
    }

    /// The closure of the lower side, `None` when unbounded below.
    pub const fn lower_bound_type(&self) -> Option<BoundType> {
        self.lower.bound_type()
    }

    /// The closure of the upper side, `None` when unbounded above.
    pub const fn upper_bound_type(&self) -> Option<BoundType> {
        self.upper.bound_type()
    }

    /// Split the interval into its two sides.
    pub fn into_endpoints(self) -> (Endpoint<LOWER, T>, Endpoint<UPPER, T>) {
        (self.lower, self.upper)
    }
}

impl<T: Ord> Interval<T> {
    /// Create an [`Interval`] from its two sides.
    ///
    /// # Errors
    ///
    /// [`IntervalError::InvalidOrder`] if both sides are bounded and the lower
    /// value is greater than the upper one, or equal to it while both sides are open.
    pub fn from_endpoints(
        lower: Endpoint<LOWER, T>,
        upper: Endpoint<UPPER, T>,
    ) -> Result<Self, IntervalError> {
        if let (Some(a), Some(b)) = (lower.value(), upper.value()) {
            let ordered = match a.cmp(b) {
                Ordering::Less => true,
                Ordering::Equal => lower.is_closed() || upper.is_closed(),
                Ordering::Greater => false,
            };
            if !ordered {
                debug!(
                    "rejecting interval: lower endpoint ({:?}) does not precede upper endpoint ({:?})",
                    lower.bound_type(),
                    upper.bound_type()
                );
                return Err(IntervalError::InvalidOrder);
            }
        }

        Ok(Self { lower, upper })
    }

    /// Create a bounded [`Interval`] with explicit closures on both sides.
    ///
    /// ```
    /// # use hyper_collections::{BoundType, Interval, IntervalError};
    /// let i = Interval::range(Some(1), BoundType::Closed, Some(4), BoundType::Open).unwrap();
    /// assert_eq!(i, Interval::closed_open(1, 4).unwrap());
    ///
    /// let missing = Interval::range(None, BoundType::Closed, Some(4), BoundType::Open);
    /// assert_eq!(missing, Err(IntervalError::MissingEndpoint));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`IntervalError::MissingEndpoint`] if any endpoint is `None`;
    /// - [`IntervalError::InvalidOrder`] as in [`Self::from_endpoints`].
    pub fn range(
        lower: Option<T>,
        lower_type: BoundType,
        upper: Option<T>,
        upper_type: BoundType,
    ) -> Result<Self, IntervalError> {
        let (Some(lower), Some(upper)) = (lower, upper) else {
            debug!("rejecting interval: missing endpoint");
            return Err(IntervalError::MissingEndpoint);
        };

        Self::from_endpoints(
            Endpoint::new(lower, lower_type),
            Endpoint::new(upper, upper_type),
        )
    }

    /// The set of values in open range `(lower, upper)`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::InvalidOrder`] unless `lower < upper`.
    pub fn open(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::from_endpoints(Endpoint::Excluded(lower), Endpoint::Excluded(upper))
    }

    /// The set of values in closed range `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// [`IntervalError::InvalidOrder`] unless `lower <= upper`.
    pub fn closed(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::from_endpoints(Endpoint::Included(lower), Endpoint::Included(upper))
    }

    /// The set of values in half-open `(lower, upper]` range.
    ///
    /// # Errors
    ///
    /// [`IntervalError::InvalidOrder`] unless `lower <= upper`.
    pub fn open_closed(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::from_endpoints(Endpoint::Excluded(lower), Endpoint::Included(upper))
    }

    /// The set of values in half-open `[lower, upper)` range.
    ///
    /// # Errors
    ///
    /// [`IntervalError::InvalidOrder`] unless `lower <= upper`.
    pub fn closed_open(lower: T, upper: T) -> Result<Self, IntervalError> {
        Self::from_endpoints(Endpoint::Included(lower), Endpoint::Excluded(upper))
    }

    /// Whether the [`Interval`] is marked as containing no values:
    /// both sides share the same value and exactly one of them is closed.
    ///
    /// A closed interval with equal endpoints is a singleton,
    /// and an open one with equal endpoints is not reported as empty either.
    ///
    /// ```
    /// # use hyper_collections::Interval;
    /// assert!(Interval::closed_open(5, 5).unwrap().is_empty());
    /// assert!(Interval::open_closed(5, 5).unwrap().is_empty());
    /// assert!(!Interval::closed(5, 5).unwrap().is_empty());
    /// assert!(!Interval::<i32>::all().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        if self.lower.is_closed() == self.upper.is_closed() {
            return false;
        }

        match (self.lower.value(), self.upper.value()) {
            (Some(a), Some(b)) => a.cmp(b).is_eq(),
            _ => false,
        }
    }

    /// Whether the [`Interval`] contains every possible value.
    pub const fn is_full(&self) -> bool {
        matches!(
            (&self.lower, &self.upper),
            (Endpoint::Infinite, Endpoint::Infinite)
        )
    }

    /// Whether the [`Interval`] contains a given point.
    pub fn contains(&self, point: &T) -> bool {
        self.lower
            .as_ref()
            .cmp_bound(&Endpoint::<LOWER, _>::Included(point))
            .is_le()
            && self
                .upper
                .as_ref()
                .cmp_bound(&Endpoint::<UPPER, _>::Included(point))
                .is_ge()
    }

    /// Whether the [`Interval`] contains a given, possibly absent, point.
    ///
    /// # Errors
    ///
    /// [`IntervalError::NullValue`] if there is no point to check.
    pub fn try_contains(&self, point: Option<&T>) -> Result<bool, IntervalError> {
        point
            .map(|p| self.contains(p))
            .ok_or(IntervalError::NullValue)
    }

    /// Whether every value of `other` is contained in this interval.
    ///
    /// An empty interval encloses nothing, not even another empty one,
    /// while a non-empty interval encloses any empty one.
    pub fn encloses(&self, other: &Self) -> bool {
        if self.is_empty() {
            return false;
        }
        if other.is_empty() {
            return true;
        }

        self.lower.cmp_bound(&other.lower).is_le() && self.upper.cmp_bound(&other.upper).is_ge()
    }

    #[must_use = "this method consume the Interval and return a new one"]
    /// The largest interval enclosed by both `self` and `other`.
    ///
    /// An empty operand is returned as is (`self` first).
    /// Disjoint operands produce an empty interval anchored at
    /// the side of `self` facing `other`.
    ///
    /// ```
    /// # use hyper_collections::Interval;
    /// let a = Interval::closed(1, 5).unwrap();
    /// let b = Interval::closed(3, 10).unwrap();
    /// assert_eq!(a.intersection(b), Interval::closed(3, 5).unwrap());
    ///
    /// let gap = Interval::closed_open(10, 20).unwrap().intersection(Interval::greater_than(20));
    /// assert!(gap.is_empty());
    /// assert_eq!(gap.lower_endpoint(), Some(&20));
    /// ```
    pub fn intersection(self, other: Self) -> Self
    where
        T: Clone,
    {
        use Endpoint::{Excluded, Included};

        if self.is_empty() {
            return self;
        }
        if other.is_empty() {
            return other;
        }

        match (self.lower.cmp_bound(&other.upper), &self.lower) {
            (Ordering::Greater, Included(v) | Excluded(v)) | (Ordering::Equal, Excluded(v)) => {
                return Self::empty_at(v.clone());
            }
            (Ordering::Equal, Included(v)) => return Self::singleton(v.clone()),
            _ => {}
        }

        match (self.upper.cmp_bound(&other.lower), &self.upper) {
            (Ordering::Less, Included(v) | Excluded(v)) | (Ordering::Equal, Excluded(v)) => {
                return Self::empty_at(v.clone());
            }
            (Ordering::Equal, Included(v)) => return Self::singleton(v.clone()),
            _ => {}
        }

        let lower = if self.lower.cmp_bound(&other.lower).is_ge() {
            self.lower
        } else {
            other.lower
        };
        let upper = if self.upper.cmp_bound(&other.upper).is_le() {
            self.upper
        } else {
            other.upper
        };

        Self { lower, upper }
    }

    #[must_use = "this method consume the Interval and return a new one"]
    /// The smallest interval enclosing both `self` and `other`.
    ///
    /// This is the convex hull of the two, not their set union:
    /// any gap between them is filled. An empty operand is ignored.
    ///
    /// ```
    /// # use hyper_collections::Interval;
    /// let a = Interval::closed(1, 3).unwrap();
    /// let b = Interval::open(5, 7).unwrap();
    /// assert_eq!(a.span(b), Interval::closed_open(1, 7).unwrap());
    /// ```
    pub fn span(self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let lower = if self.lower.cmp_bound(&other.lower).is_le() {
            self.lower
        } else {
            other.lower
        };
        let upper = if self.upper.cmp_bound(&other.upper).is_ge() {
            self.upper
        } else {
            other.upper
        };

        Self { lower, upper }
    }
}

#[macro_export]
/// Create an [`Interval`] using a concise syntax.
///
/// One-sided and unbounded forms produce an [`Interval`] directly,
/// the bounded forms go through the validating constructors
/// and produce a `Result`.
///
/// ```
/// # use hyper_collections::{interval, Interval};
///
/// assert_eq!(interval!(< 5), Interval::less_than(5));
/// assert_eq!(interval!(<= 3), Interval::at_most(3));
/// assert_eq!(interval!(> -10), Interval::greater_than(-10));
/// assert_eq!(interval!(>= 0u32), Interval::at_least(0u32));
/// assert_eq!(interval!(= 42), Interval::singleton(42));
/// assert_eq!(interval!(== 42), Interval::singleton(42));
///
/// assert_eq!(interval!((1, 10)), Interval::open(1, 10));
/// assert_eq!(interval!((0, =100)), Interval::open_closed(0, 100));
/// assert_eq!(interval!((=0, 100)), Interval::closed_open(0, 100));
/// assert_eq!(interval!([0, 1]), Interval::closed(0, 1));
/// assert_eq!(interval!((=0, =1)), Interval::closed(0, 1));
///
/// assert_eq!(interval!(..), Interval::<i64>::all());
/// assert_eq!(interval!(..: char), Interval::all());
/// ```
macro_rules! interval {
    (< $x:expr) => {
        $crate::Interval::less_than($x)
    };
    (<= $x:expr) => {
        $crate::Interval::at_most($x)
    };
    (> $x:expr) => {
        $crate::Interval::greater_than($x)
    };
    (>= $x:expr) => {
        $crate::Interval::at_least($x)
    };
    (= $x:expr) => {
        $crate::Interval::singleton($x)
    };
    (== $x:expr) => {
        $crate::Interval::singleton($x)
    };
    ( ( $a:expr , $b:expr ) ) => {
        $crate::Interval::open($a, $b)
    };

    // unbalanced [ and ) are not supported in macros to avoid confusion
    ( ($a:expr , =$b:expr) ) => {
        $crate::Interval::open_closed($a, $b)
    };
    ( ( =$a:expr , $b:expr ) ) => {
        $crate::Interval::closed_open($a, $b)
    };
    ( ( =$a:expr , =$b:expr ) ) => {
        $crate::Interval::closed($a, $b)
    };

    ( [ $a:expr , $b:expr ] ) => {
        $crate::Interval::closed($a, $b)
    };
    (.. $(:$t:ty)? ) => {
        $crate::Interval $(::<$t>)? ::all()
    };
}
