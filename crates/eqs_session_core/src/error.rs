use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("History encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
