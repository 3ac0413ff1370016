use thiserror::Error;
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot parse {token:?} as a number ({context})")]
    Parse { token: String, context: String },
    #[error("shape mismatch: expected {expected} samples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("row {row}: expected {expected} columns, got {actual}")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("input contains no data")]
    EmptyInput,
    #[error("invalid config: {0}")]
    Config(String),
}
impl From<serde_json::Error> for AnalysisError {
    fn from(value: serde_json::Error) -> Self {
        AnalysisError::Config(value.to_string())
    }
}
