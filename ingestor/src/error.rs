#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("input format error: {0}")]
    Corrupt(String),
    #[error("order violation: {0}")]
    OrderViolation(#[from] copy_match_engine::EngineError),
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("report emission failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("symbol dictionary error: {0}")]
    Dictionary(#[from] serde_json::Error),
}
