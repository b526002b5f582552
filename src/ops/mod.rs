pub mod aggregate;
pub mod sort;

pub use aggregate::{Summable, sum, sum_values};
pub use sort::{Direction, SortExecutor, ValueComparator, from_less_than, sorted_by};
