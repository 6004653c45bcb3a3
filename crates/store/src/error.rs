use thiserror::Error;

/// Failures from a persistent backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store data is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
