use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrimerError>;

impl PrimerError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }
}
