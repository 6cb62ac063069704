pub mod summary;
pub mod tables;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dataset parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Dataset has {have} states, but this figure needs {needed}")]
    InsufficientStates { needed: usize, have: usize },
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
