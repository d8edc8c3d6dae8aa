use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmnipmError {
    /// The `--lang` hint matched no registered backend
    #[error("no such language: {0}")]
    UnknownLanguage(String),

    /// No hint given and no backend found evidence in the project directory
    #[error("could not autodetect a language for your project")]
    NoLanguageDetected,

    #[error("Backend '{name}' is invalid: {reason}")]
    InvalidBackend { name: String, reason: String },

    #[error("Backend '{0}' is registered more than once")]
    DuplicateBackend(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("KDL parse error: {0}")]
    KdlError(#[from] kdl::KdlError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, OmnipmError>;
