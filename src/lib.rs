// ============================================================================
// Primer Library
// ============================================================================

pub mod core;
pub mod collections;
pub mod logger;
pub mod ops;
pub mod person;
pub mod prelude;
pub mod tour;

// Re-export main types for convenience
pub use crate::core::{PrimerError, Result, Value};
pub use crate::collections::{AssociativeCollection, Identity, Key, UniqueCollection};
pub use crate::logger::Logger;
pub use crate::ops::{Direction, SortExecutor, Summable, from_less_than, sorted_by, sum, sum_values};
pub use crate::person::{Greeter, Person, Pirate};
pub use crate::tour::{Section, Tour, TourConfig};
