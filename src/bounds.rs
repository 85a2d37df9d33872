use core::{cmp::Ordering, fmt, ops::Bound};

/// Marker for the lower (left) side of an interval.
pub const LOWER: bool = false;
/// Marker for the upper (right) side of an interval.
pub const UPPER: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Whether an endpoint value belongs to the interval.
pub enum BoundType {
    /// The endpoint value is excluded.
    Open,
    /// The endpoint value is included.
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
/// One side of an interval.
///
/// The `SIDE` parameter is either [`LOWER`] or [`UPPER`]
/// and decides where [`Endpoint::Infinite`] lies: at −∞ or at +∞.
pub enum Endpoint<const SIDE: bool, T> {
    /// The point is included in the interval.
    Included(T),
    /// The point is excluded from the interval.
    Excluded(T),
    /// The interval is unbounded in this direction.
    Infinite,
}

impl<const SIDE: bool, T> Endpoint<SIDE, T> {
    /// Create a finite endpoint with the given closure.
    pub fn new(value: T, bound_type: BoundType) -> Self {
        match bound_type {
            BoundType::Closed => Self::Included(value),
            BoundType::Open => Self::Excluded(value),
        }
    }

    /// Convert [`Endpoint`] into a [`Bound`].
    pub fn into_bound(self) -> Bound<T> {
        match self {
            Self::Included(v) => Bound::Included(v),
            Self::Excluded(v) => Bound::Excluded(v),
            Self::Infinite => Bound::Unbounded,
        }
    }

    /// The endpoint value, if the interval is bounded on this side.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Included(v) | Self::Excluded(v) => Some(v),
            Self::Infinite => None,
        }
    }

    /// Take the endpoint value out, if the interval is bounded on this side.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Included(v) | Self::Excluded(v) => Some(v),
            Self::Infinite => None,
        }
    }

    /// Whether the endpoint value itself belongs to the interval.
    ///
    /// An infinite endpoint is never closed.
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Included(_))
    }

    /// The closure of a finite endpoint.
    pub const fn bound_type(&self) -> Option<BoundType> {
        match self {
            Self::Included(_) => Some(BoundType::Closed),
            Self::Excluded(_) => Some(BoundType::Open),
            Self::Infinite => None,
        }
    }

    pub(crate) const fn as_ref(&self) -> Endpoint<SIDE, &T> {
        match self {
            Self::Included(v) => Endpoint::Included(v),
            Self::Excluded(v) => Endpoint::Excluded(v),
            Self::Infinite => Endpoint::Infinite,
        }
    }

    /// Represent the result of operation `Infinite.cmp(Bounded)`,
    /// i.e. the comparison of infinity with the finite number.
    ///
    /// E.g.:
    /// - for the `LOWER` side: `Infinite == -inf < x == Bounded`;
    /// - for the `UPPER` side: `Infinite == +inf > x == Bounded`;
    ///
    /// This is also how a closed endpoint of this side compares
    /// with an open one sharing the same value.
    pub(crate) const fn to_inf_ordering() -> Ordering {
        #[allow(clippy::match_bool)]
        match SIDE {
            LOWER => Ordering::Less,
            UPPER => Ordering::Greater,
        }
    }

    /// Boundary-aware comparison of this endpoint against another one,
    /// possibly belonging to the opposite side.
    ///
    /// Infinite endpoints sit at −∞ or +∞ according to their side.
    /// Finite endpoints are ordered by value, and equal values are
    /// resolved by the closures from the point of view of `self`'s side:
    ///
    /// | self   | other  | `LOWER` self | `UPPER` self |
    /// |--------|--------|--------------|--------------|
    /// | closed | closed | `Equal`      | `Equal`      |
    /// | closed | open   | `Less`       | `Greater`    |
    /// | open   | closed | `Greater`    | `Less`       |
    /// | open   | open   | `Equal`      | `Equal`      |
    ///
    /// An open lower endpoint meeting an open upper endpoint at the same value
    /// is thus `Equal`: the two touch with nothing in between.
    ///
    /// ```
    /// # use core::cmp::Ordering;
    /// # use hyper_collections::{Endpoint, LOWER, UPPER};
    /// let lower = Endpoint::<LOWER, _>::Included(5);
    /// let upper = Endpoint::<UPPER, _>::Excluded(5);
    /// assert_eq!(lower.cmp_bound(&upper), Ordering::Less);
    /// assert_eq!(upper.cmp_bound(&lower), Ordering::Less);
    /// assert_eq!(Endpoint::<LOWER, i32>::Infinite.cmp_bound(&upper), Ordering::Less);
    /// ```
    pub fn cmp_bound<const OTHER: bool>(&self, other: &Endpoint<OTHER, T>) -> Ordering
    where
        T: Ord,
    {
        use Endpoint::{Excluded, Included, Infinite};

        let to_inf_ordering = Self::to_inf_ordering();

        match (self, other) {
            (Infinite, Infinite) if SIDE == OTHER => Ordering::Equal,
            (Infinite, _) => to_inf_ordering,
            (_, Infinite) => Endpoint::<OTHER, T>::to_inf_ordering().reverse(),

            (Included(a), Included(b)) | (Excluded(a), Excluded(b)) => a.cmp(b),
            (Included(a), Excluded(b)) => a.cmp(b).then(to_inf_ordering),
            (Excluded(a), Included(b)) => a.cmp(b).then(to_inf_ordering.reverse()),
        }
    }
}

impl<const SIDE: bool, T> From<Endpoint<SIDE, T>> for Bound<T> {
    fn from(value: Endpoint<SIDE, T>) -> Self {
        value.into_bound()
    }
}

impl<const SIDE: bool, T> From<Bound<T>> for Endpoint<SIDE, T> {
    fn from(value: Bound<T>) -> Self {
        match value {
            Bound::Included(v) => Self::Included(v),
            Bound::Excluded(v) => Self::Excluded(v),
            Bound::Unbounded => Self::Infinite,
        }
    }
}

impl<const SIDE: bool, T> fmt::Display for Endpoint<SIDE, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::match_bool)]
        match SIDE {
            LOWER => match self {
                Self::Included(v) => {
                    write!(f, "[")?;
                    v.fmt(f)
                }
                Self::Excluded(v) => {
                    write!(f, "(")?;
                    v.fmt(f)
                }
                Self::Infinite => write!(f, "(-INF"),
            },
            UPPER => match self {
                Self::Included(v) => {
                    v.fmt(f)?;
                    write!(f, "]")
                }
                Self::Excluded(v) => {
                    v.fmt(f)?;
                    write!(f, ")")
                }
                Self::Infinite => write!(f, "INF)"),
            },
        }
    }
}

impl<const SIDE: bool, T: Ord> PartialOrd for Endpoint<SIDE, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const SIDE: bool, T: Ord> Ord for Endpoint<SIDE, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_bound(other)
    }
}
