use thiserror::Error;

/// Top-level error type shared by the LexiBill crates.
///
/// Port implementations (stores, presenters) report failures through this
/// type; the intake engine converts it into its own error or an inline
/// transcript message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LexiBillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Presentation error: {0}")]
    Presentation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for LexiBillError {
    fn from(err: toml::de::Error) -> Self {
        LexiBillError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LexiBillError {
    fn from(err: toml::ser::Error) -> Self {
        LexiBillError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for LexiBill operations.
pub type Result<T> = std::result::Result<T, LexiBillError>;
