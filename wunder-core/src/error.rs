use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument violated the client contract, such as an
    /// empty chained feature set or a date string not in `YYYYMMDD` form.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network or JSON-decode failure from the HTTP transport, passed
    /// through untranslated.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
