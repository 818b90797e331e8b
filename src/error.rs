
use ndarray_npy::WriteNpyError;


#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("undefined ratio: {0}")]
    UndefinedRatio(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("npy error: {0}")]
    Npy(#[from] WriteNpyError),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
