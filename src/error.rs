use thiserror::Error;

#[derive(Error, Debug)]
pub enum DroneScoreError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid drone configuration: {0}")]
    InvalidConfiguration(String),

    #[error("dataset header mismatch: {0}")]
    HeaderMismatch(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DroneScoreError>;
