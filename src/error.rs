//! Error type shared by every route function.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The process-wide configuration is missing a value the request needs
    /// (base URL, VPD URL, or API key).
    #[error("{0}")]
    Config(String),

    /// The request was rejected, either locally before sending or by the
    /// API itself (the message carries the server's `detail` string).
    #[error("{0}")]
    Api(String),

    /// The requested resource does not exist on the server.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
