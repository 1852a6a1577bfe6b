use drishti::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("Expected {0} to be present in the store")]
    Missing(String),
}
