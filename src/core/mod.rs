pub mod error;
pub mod value;

pub use error::{PrimerError, Result};
pub use value::Value;
