//! Insertion-ordered collections.
//!
//! Both collections are owned by a single caller and carry no internal
//! synchronization; wrap them in a lock to share across threads.

pub mod associative;
pub mod identity;
pub mod unique;

pub use associative::AssociativeCollection;
pub use identity::{Identity, Key};
pub use unique::UniqueCollection;
