//! Everything needed for typical use, importable in one line.

pub use crate::collections::{AssociativeCollection, Identity, Key, UniqueCollection};
pub use crate::core::{PrimerError, Result, Value};
pub use crate::logger::Logger;
pub use crate::ops::{Direction, Summable, from_less_than, sorted_by, sum_values};
pub use crate::person::{Greeter, Person, Pirate};
// `sum` brings in both the function and the variadic macro
pub use crate::{spread, sum};
