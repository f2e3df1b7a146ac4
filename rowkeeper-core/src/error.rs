use rowkeeper_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] ModelError),

    #[error("Dataset of {requested} items exceeds the supported maximum of {max}")]
    DatasetTooLarge { requested: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
