use thiserror::Error;

/// Unified result type for the totuzen crate.
pub type Result<T> = std::result::Result<T, ArtError>;

/// Errors surfaced by the ambient layer around the layout engine.
///
/// The layout functions themselves are total over any Unicode input and
/// never return these; only configuration and log delivery can fail.
#[derive(Debug, Error)]
pub enum ArtError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("log serialization error: {0}")]
    Logging(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
