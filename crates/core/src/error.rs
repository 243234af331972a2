use std::io;

/// Errors that can occur while resolving third-party build configuration.
///
/// Variants carry rendered messages rather than source errors so that
/// memoized `Result`s stay `Clone`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("pkg-config error: {0}")]
    PkgConfigError(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

/// Result type alias for buildenv operations
pub type Result<T> = std::result::Result<T, Error>;
