use tracing::debug;

use crate::core::{PrimerError, Result, Value};

/// Addition that reports failure instead of panicking or wrapping.
pub trait Summable: Sized {
    fn try_add(self, rhs: Self) -> Result<Self>;
}

macro_rules! impl_summable_integer {
    ($($ty:ty),+) => {
        $(
            impl Summable for $ty {
                fn try_add(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs).ok_or_else(|| {
                        PrimerError::Overflow(format!(
                            "{} + {} overflows {}",
                            self,
                            rhs,
                            stringify!($ty)
                        ))
                    })
                }
            }
        )+
    };
}

impl_summable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats saturate to infinity by themselves
impl Summable for f32 {
    fn try_add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }
}

impl Summable for f64 {
    fn try_add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }
}

impl Summable for Value {
    fn try_add(self, rhs: Self) -> Result<Self> {
        self.checked_add(&rhs)
    }
}

/// Sums `values` by strict left-to-right reduction.
///
/// The first value seeds the accumulator; there is no implicit zero, so an
/// empty input is rejected with [`PrimerError::InvalidArgument`]. Integer
/// overflow stops the reduction with [`PrimerError::Overflow`].
pub fn sum<T, I>(values: I) -> Result<T>
where
    I: IntoIterator<Item = T>,
    T: Summable,
{
    let mut values = values.into_iter();
    let first = values.next().ok_or_else(empty_input)?;

    values.try_fold(first, |acc, value| {
        acc.try_add(value).inspect_err(|err| {
            debug!(error = %err, "sum aborted");
        })
    })
}

/// Sums dynamically-typed values, failing on the first incompatible pair.
pub fn sum_values<I>(values: I) -> Result<Value>
where
    I: IntoIterator<Item = Value>,
{
    sum(values)
}

fn empty_input() -> PrimerError {
    debug!("sum called without arguments");
    PrimerError::InvalidArgument("sum requires at least one value".into())
}

/// Variadic sum: `sum!(1, 5, 10, 20)` evaluates to `Ok(36)`.
#[macro_export]
macro_rules! sum {
    () => {
        $crate::ops::aggregate::sum(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ops::aggregate::sum([$($value),+])
    };
}

/// Collects its arguments into a `Vec`: `spread!(1, 2, 3) == vec![1, 2, 3]`.
#[macro_export]
macro_rules! spread {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($value),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_integers() {
        assert_eq!(sum([1, 5, 10, 20]).unwrap(), 36);
        assert_eq!(sum(vec![7]).unwrap(), 7);
    }

    #[test]
    fn test_sum_overflow_is_reported() {
        let err = sum([i64::MAX, 1]).unwrap_err();
        assert!(matches!(err, PrimerError::Overflow(_)));

        assert!(matches!(sum([200u8, 50, 10]), Err(PrimerError::Overflow(_))));
        assert_eq!(sum([i64::MAX, -2, 1]).unwrap(), i64::MAX - 1);
    }

    #[test]
    fn test_sum_empty_is_invalid_argument() {
        let err = sum(Vec::<i32>::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sum_floats() {
        assert_eq!(sum([0.5, 0.25, 0.25]).unwrap(), 1.0);
    }

    #[test]
    fn test_sum_values_concatenates_text_in_order() {
        let text = sum_values(["a", "b", "c"].map(Value::from)).unwrap();
        assert_eq!(text, Value::from("abc"));
    }

    #[test]
    fn test_sum_values_mixed_numeric() {
        let total = sum_values([Value::Integer(1), Value::Float(0.5), Value::Integer(2)]).unwrap();
        assert_eq!(total, Value::Float(3.5));
    }

    #[test]
    fn test_sum_values_rejects_non_numeric() {
        let err = sum_values([Value::Integer(1), Value::Boolean(true)]).unwrap_err();
        assert!(err.is_type_mismatch());

        let err = sum_values(Vec::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_macros() {
        let total: Result<i32> = crate::sum!(1, 5, 10, 20);
        assert_eq!(total.unwrap(), 36);

        let empty: Result<i64> = crate::sum!();
        assert!(empty.is_err());

        assert_eq!(crate::spread!(3, 4, 5), vec![3, 4, 5]);
    }
}
