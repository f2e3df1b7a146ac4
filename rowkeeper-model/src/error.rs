use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidPage(u64),
    InvalidLimit(u64),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidPage(page) => {
                write!(f, "invalid page {page}: pages start at 1")
            }
            ModelError::InvalidLimit(limit) => {
                write!(f, "invalid limit {limit}: limit must be positive")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
