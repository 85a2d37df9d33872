use core::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

use crate::{Interval, IntervalError};

impl<T> From<RangeFull> for Interval<T> {
    fn from(_: RangeFull) -> Self {
        Self::all()
    }
}

impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(RangeFrom { start }: RangeFrom<T>) -> Self {
        Self::at_least(start)
    }
}

impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(RangeTo { end }: RangeTo<T>) -> Self {
        Self::less_than(end)
    }
}

impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(RangeToInclusive { end }: RangeToInclusive<T>) -> Self {
        Self::at_most(end)
    }
}

impl<T: Ord> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(Range { start, end }: Range<T>) -> Result<Self, Self::Error> {
        Self::closed_open(start, end)
    }
}

impl<T: Ord> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(value: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = value.into_inner();
        Self::closed(start, end)
    }
}

impl<T: Ord> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.lower().as_ref().into_bound()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.upper().as_ref().into_bound()
    }

    fn contains<U>(&self, item: &U) -> bool
    where
        T: PartialOrd<U>,
        U: ?Sized + PartialOrd<T>,
    {
        (match self.start_bound() {
            Bound::Included(start) => start <= item,
            Bound::Excluded(start) => start < item,
            Bound::Unbounded => true,
        }) && (match self.end_bound() {
            Bound::Included(end) => item <= end,
            Bound::Excluded(end) => item < end,
            Bound::Unbounded => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less() {
        let i: Interval<i32> = (..-5).into();
        assert_eq!(i, Interval::less_than(-5));
        assert_eq!(i.start_bound(), Bound::Unbounded);
        assert_eq!(i.end_bound(), Bound::Excluded(&-5));
    }

    #[test]
    fn less_eq() {
        let i: Interval<i32> = (..=-5).into();
        assert_eq!(i, Interval::at_most(-5));
        assert_eq!(i.end_bound(), Bound::Included(&-5));
    }

    #[test]
    fn greater_eq() {
        let i: Interval<i32> = (5..).into();
        assert_eq!(i, Interval::at_least(5));
        assert_eq!(i.start_bound(), Bound::Included(&5));
        assert_eq!(i.end_bound(), Bound::Unbounded);
    }

    #[test]
    fn closed_open() {
        assert_eq!(
            Interval::<i32>::try_from(5..7),
            Ok(Interval::closed_open(5, 7).unwrap())
        );
        assert_eq!(
            Interval::<i32>::try_from(5..5).map(|i| i.is_empty()),
            Ok(true)
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = Interval::<i32>::try_from(7..5);
        assert_eq!(reversed, Err(IntervalError::InvalidOrder));
    }

    #[test]
    fn closed() {
        assert_eq!(
            Interval::<i32>::try_from(5..=7),
            Ok(Interval::closed(5, 7).unwrap())
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = Interval::<i32>::try_from(7..=5);
        assert_eq!(reversed, Err(IntervalError::InvalidOrder));
    }

    #[test]
    fn full() {
        let i: Interval<u8> = (..).into();
        assert_eq!(i, Interval::all());
        assert_eq!(i.start_bound(), Bound::Unbounded);
    }

    #[test]
    fn range_bounds_contains() {
        let i = Interval::open_closed(5, 7).unwrap();
        assert!(!RangeBounds::contains(&i, &5));
        assert!(RangeBounds::contains(&i, &6));
        assert!(RangeBounds::contains(&i, &7));
        assert!(!RangeBounds::contains(&i, &8));
    }

    #[test]
    fn slices_by_interval() {
        let data = [0, 1, 2, 3, 4, 5];
        let i = Interval::closed_open(1_usize, 4).unwrap();
        assert_eq!(
            &data[(i.start_bound().cloned(), i.end_bound().cloned())],
            &[1, 2, 3]
        );
    }
}
