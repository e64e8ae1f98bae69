use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage i/o failed: {0}")]
    Io(String),
}
