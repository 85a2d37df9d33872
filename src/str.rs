use core::fmt;

use crate::Interval;

impl<T: Ord + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("EMPTY");
        }

        self.lower().fmt(f)?;
        f.write_str(", ")?;
        self.upper().fmt(f)
    }
}


#[cfg(all(feature = "serde", test))]
mod deser_tests {
    use alloc::string::ToString as _;

    use serde_json::json;

    use crate::{Endpoint, IntervalError};

    use super::*;

    #[test]
    fn closed_open() {
        let expected = Interval::closed_open(5, 7).unwrap();

        let j = json!({
            "lower": { "INCLUDED": 5 },
            "upper": { "EXCLUDED": 7 },
        });
        let i: Interval<i32> = serde_json::from_value(j.clone()).unwrap();
        assert_eq!(i, expected);
        assert_eq!(serde_json::to_value(expected).unwrap(), j);
    }

    #[test]
    fn one_sided() {
        let j = json!({
            "lower": "INFINITE",
            "upper": { "INCLUDED": -5 },
        });
        let i: Interval<i32> = serde_json::from_value(j).unwrap();
        assert_eq!(i, Interval::at_most(-5));
    }

    #[test]
    fn full() {
        let j = json!({
            "lower": "INFINITE",
            "upper": "INFINITE",
        });
        let i: Interval<i32> = serde_json::from_value(j).unwrap();
        assert_eq!(i, Interval::all());
    }

    #[test]
    fn empty_marker_survives() {
        let empty = Interval::closed(1, 2)
            .unwrap()
            .intersection(Interval::greater_than(2));
        let j = serde_json::to_value(empty).unwrap();
        let restored: Interval<i32> = serde_json::from_value(j).unwrap();
        assert!(restored.is_empty());
        assert_eq!(restored.lower(), &Endpoint::Excluded(2));
    }

    #[test]
    fn rejects_out_of_order() {
        let j = json!({
            "lower": { "INCLUDED": 9 },
            "upper": { "INCLUDED": 1 },
        });
        let err = serde_json::from_value::<Interval<i32>>(j).unwrap_err();
        assert!(err
            .to_string()
            .contains(&IntervalError::InvalidOrder.to_string()));

        let j = json!({
            "lower": { "EXCLUDED": 3 },
            "upper": { "EXCLUDED": 3 },
        });
        assert!(serde_json::from_value::<Interval<i32>>(j).is_err());
    }
}
