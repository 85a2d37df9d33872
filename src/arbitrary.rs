use core::fmt;

use proptest::prelude::*;

use super::Interval;

impl<T> Interval<T> {
    fn arbitrary_with_bounds_strategy(input: BoxedStrategy<T>) -> impl Strategy<Value = Self>
    where
        T: fmt::Debug + Ord + Clone + 'static,
    {
        let ordered_pair = (input.clone(), input.clone())
            .prop_map(|(a, b)| if b < a { (b, a) } else { (a, b) })
            .boxed();
        let rejected = "open intervals need distinct endpoints";

        prop::strategy::Union::new([
            Just(Self::all()).boxed(),
            input.clone().prop_map(Self::greater_than).boxed(),
            input.clone().prop_map(Self::at_least).boxed(),
            input.clone().prop_map(Self::less_than).boxed(),
            input.prop_map(Self::at_most).boxed(),
            ordered_pair
                .clone()
                .prop_filter_map(rejected, |(a, b)| Self::open(a, b).ok())
                .boxed(),
            ordered_pair
                .clone()
                .prop_filter_map(rejected, |(a, b)| Self::closed(a, b).ok())
                .boxed(),
            ordered_pair
                .clone()
                .prop_filter_map(rejected, |(a, b)| Self::open_closed(a, b).ok())
                .boxed(),
            ordered_pair
                .prop_filter_map(rejected, |(a, b)| Self::closed_open(a, b).ok())
                .boxed(),
        ])
    }
}

impl<T> Arbitrary for Interval<T>
where
    T: Ord + Clone + Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let any = any_with::<T>(args).boxed();
        Self::arbitrary_with_bounds_strategy(any).boxed()
    }
}

/// Strategy over intervals whose endpoints are drawn from `endpoints`.
///
/// Unlike the [`Arbitrary`] implementation, this lets the caller keep
/// the endpoints close to each other so that intervals overlap often.
pub fn intervals_within<T, S>(endpoints: S) -> BoxedStrategy<Interval<T>>
where
    T: fmt::Debug + Ord + Clone + 'static,
    S: Strategy<Value = T> + 'static,
{
    Interval::arbitrary_with_bounds_strategy(endpoints.boxed()).boxed()
}

#[cfg(test)]
mod prop_test {
    use super::*;

    type Int = i8;
    const PARAM_BOUND: Int = 20;

    fn params_range() -> impl Strategy<Value = Int> {
        -PARAM_BOUND..=PARAM_BOUND
    }

    fn small_interval() -> BoxedStrategy<Interval<Int>> {
        intervals_within(-PARAM_BOUND / 2..=PARAM_BOUND / 2)
    }

    fn same_points(a: &Interval<Int>, b: &Interval<Int>) -> bool {
        (-PARAM_BOUND..=PARAM_BOUND).all(|x| a.contains(&x) == b.contains(&x))
    }

    proptest! {
        // https://proptest-rs.github.io/proptest/proptest/tutorial/config.html
        #![proptest_config(ProptestConfig::with_cases(4000))]

        #[test]
        fn closed_contains_endpoints(a in params_range(), delta in 1..=PARAM_BOUND) {
            let b = a + delta;
            let closed = Interval::closed(a, b).unwrap();
            prop_assert!(closed.contains(&a));
            prop_assert!(closed.contains(&b));

            let open = Interval::open(a, b).unwrap();
            prop_assert!(!open.contains(&a));
            prop_assert!(!open.contains(&b));
        }

        #[test]
        fn open_rejects_non_increasing(a in params_range(), delta in 0..=PARAM_BOUND) {
            let b = a - delta;
            prop_assert!(Interval::open(a, b).is_err());
            prop_assert_eq!(Interval::closed(a, b).is_ok(), delta == 0);
        }

        #[test]
        fn full_contains_all(x: Int) {
            prop_assert!(Interval::all().contains(&x));
        }

        #[test]
        fn missing_point_always_fails(range: Interval<Int>) {
            prop_assert!(range.try_contains(None).is_err());
        }

        #[test]
        fn intersection_with_self_keeps_points(range in small_interval()) {
            prop_assert!(same_points(&range.intersection(range), &range));
        }

        #[test]
        fn intersection_commutes_pointwise(
            range1 in small_interval(),
            range2 in small_interval(),
        ) {
            let left = range1.intersection(range2);
            let right = range2.intersection(range1);
            prop_assert!(same_points(&left, &right));
        }

        #[test]
        fn intersection_is_common_part(
            range1 in small_interval(),
            range2 in small_interval(),
            x in params_range(),
        ) {
            let res = range1.intersection(range2);
            prop_assert_eq!(res.contains(&x), range1.contains(&x) && range2.contains(&x));
        }

        #[test]
        fn span_encloses_both(range1 in small_interval(), range2 in small_interval()) {
            prop_assume!(!range1.is_empty() && !range2.is_empty());
            let span = range1.span(range2);
            prop_assert!(span.encloses(&range1));
            prop_assert!(span.encloses(&range2));
        }

        #[test]
        fn span_covers_every_point(
            range1 in small_interval(),
            range2 in small_interval(),
            x in params_range(),
        ) {
            if range1.contains(&x) || range2.contains(&x) {
                prop_assert!(range1.span(range2).contains(&x));
            }
        }

        #[test]
        fn enclosure_implies_containment(
            outer in small_interval(),
            inner in small_interval(),
            x in params_range(),
        ) {
            if outer.encloses(&inner) && inner.contains(&x) {
                prop_assert!(outer.contains(&x));
            }
        }

        #[test]
        fn generated_intervals_are_valid(range: Interval<Int>) {
            let (lower, upper) = range.into_endpoints();
            prop_assert_eq!(Interval::from_endpoints(lower, upper), Ok(range));
        }
    }
}
