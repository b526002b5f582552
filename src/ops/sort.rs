// ============================================================================
// src/ops/sort.rs - Comparator-driven sorting
// ============================================================================
//
// Comparators are tri-state (`Ordering`). A boolean "less than" test can be
// lifted into one with `from_less_than`, which reports Equal when neither
// side is less instead of biasing ties toward Greater.
//
// Callers must not rely on the relative order of equal elements.
//
// ============================================================================

use std::cmp::Ordering;

use tracing::debug;

use crate::core::{PrimerError, Result, Value};

// ============================================================================
// GENERIC SORTING
// ============================================================================

/// Returns a new vector ordered according to `compare`.
pub fn sorted_by<T, I, F>(items: I, compare: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items: Vec<T> = items.into_iter().collect();
    items.sort_by(compare);
    items
}

/// Lifts a strict less-than predicate into a tri-state comparator.
pub fn from_less_than<T, F>(less_than: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> bool,
{
    move |a: &T, b: &T| {
        if less_than(a, b) {
            Ordering::Less
        } else if less_than(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

// ============================================================================
// SORT DIRECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

// ============================================================================
// VALUE COMPARATOR
// ============================================================================

/// Compares dynamic values in a fixed direction.
///
/// Null sorts last when ascending and first when descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueComparator {
    direction: Direction,
}

impl ValueComparator {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        Ok(self.direction.apply(a.compare(b)?))
    }
}

// ============================================================================
// SORT EXECUTOR
// ============================================================================

pub struct SortExecutor;

impl SortExecutor {
    /// Sorts dynamic values.
    ///
    /// Every non-null value must be comparable with every other; the first
    /// incompatible pair is reported as [`PrimerError::TypeMismatch`] and
    /// nothing is sorted.
    pub fn sort_values(mut values: Vec<Value>, direction: Direction) -> Result<Vec<Value>> {
        Self::check_comparable(&values)?;

        let comparator = ValueComparator::new(direction);
        values.sort_by(|a, b| comparator.compare(a, b).unwrap_or(Ordering::Equal));

        Ok(values)
    }

    // Comparability is decided by kind, so checking against one anchor suffices
    fn check_comparable(values: &[Value]) -> Result<()> {
        let mut non_null = values.iter().filter(|v| !v.is_null());
        let Some(anchor) = non_null.next() else {
            return Ok(());
        };

        for value in non_null {
            if let Err(err) = anchor.compare(value) {
                debug!(error = %err, "refusing to sort mixed values");
                return Err(PrimerError::TypeMismatch(format!(
                    "Cannot sort {} together with {}",
                    anchor.type_name(),
                    value.type_name()
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
