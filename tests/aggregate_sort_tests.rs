use std::cmp::Ordering;

use primer::prelude::*;
use primer::{SortExecutor, spread};
use proptest::prelude::*;

#[test]
fn test_sum_macro_spread_form() {
    let total: Result<i64> = sum!(1, 5, 10, 20);
    assert_eq!(total.unwrap(), 36);
    assert_eq!(spread!(1, 2, 3), vec![1, 2, 3]);
}

#[test]
fn test_empty_sum_is_invalid_argument() {
    let err = sum(Vec::<f64>::new()).unwrap_err();
    assert!(matches!(err, PrimerError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid argument: sum requires at least one value");
}

#[test]
fn test_sum_values_overflow() {
    let err = sum_values([Value::Integer(i64::MAX), Value::Integer(1)]).unwrap_err();
    assert!(matches!(err, PrimerError::Overflow(_)));
}

#[test]
fn test_sum_macro_reports_integer_overflow() {
    let total: Result<i64> = sum!(i64::MAX, 1);
    assert!(matches!(total, Err(PrimerError::Overflow(_))));
}

#[test]
fn test_sort_values_mixed_numerics_beyond_f64_precision() {
    let big = 9_007_199_254_740_992i64; // 2^53
    let values = vec![Value::Integer(big + 1), Value::Float(big as f64), Value::Integer(big)];

    let sorted = SortExecutor::sort_values(values, Direction::Ascending).unwrap();

    assert_eq!(sorted[2], Value::Integer(big + 1));
    assert_eq!(sorted[0].compare(&sorted[1]).unwrap(), Ordering::Equal);
    for pair in sorted.windows(2) {
        assert_ne!(pair[0].compare(&pair[1]).unwrap(), Ordering::Greater);
    }
}

#[test]
fn test_boolean_comparator_is_lifted() {
    let sorted = sorted_by(vec![1, 5, 8, 2, 3, 4], from_less_than(|a: &i32, b: &i32| a < b));
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 8]);
}

#[test]
fn test_sort_values_by_direction() {
    let values = vec![Value::Integer(2), Value::Null, Value::Integer(1)];

    let ascending = SortExecutor::sort_values(values.clone(), Direction::Ascending).unwrap();
    assert_eq!(ascending, vec![Value::Integer(1), Value::Integer(2), Value::Null]);

    let descending = SortExecutor::sort_values(values, Direction::Descending).unwrap();
    assert_eq!(descending, vec![Value::Null, Value::Integer(2), Value::Integer(1)]);
}

proptest! {
    #[test]
    fn prop_sum_matches_reference(values in proptest::collection::vec(any::<i32>(), 1..64)) {
        let widened: Vec<i64> = values.iter().map(|&v| i64::from(v)).collect();
        let expected: i64 = widened.iter().sum();

        prop_assert_eq!(sum(widened.clone()).unwrap(), expected);
        prop_assert_eq!(
            sum_values(widened.into_iter().map(Value::Integer)).unwrap(),
            Value::Integer(expected)
        );
    }

    #[test]
    fn prop_sum_is_order_independent(mut values in proptest::collection::vec(-1000i64..1000, 1..32)) {
        let forward = sum(values.clone()).unwrap();
        values.reverse();
        prop_assert_eq!(sum(values).unwrap(), forward);
    }

    #[test]
    fn prop_sort_is_permutation(values in proptest::collection::vec(any::<i32>(), 0..64), descending in any::<bool>()) {
        let sorted = sorted_by(values.clone(), |a: &i32, b: &i32| {
            let ord = a.cmp(b);
            if descending { ord.reverse() } else { ord }
        });

        let mut expected = values.clone();
        expected.sort();
        let mut actual = sorted.clone();
        actual.sort();
        prop_assert_eq!(actual, expected);

        for pair in sorted.windows(2) {
            let ord = pair[0].cmp(&pair[1]);
            if descending {
                prop_assert_ne!(ord, Ordering::Less);
            } else {
                prop_assert_ne!(ord, Ordering::Greater);
            }
        }
    }

    #[test]
    fn prop_less_than_sort_is_ordered_permutation(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let sorted = sorted_by(values.clone(), from_less_than(|a: &i32, b: &i32| a < b));

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }
}
