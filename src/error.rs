use std::io;

use crate::util::BoxError;

/// Errors that make a call fail outright.
///
/// Error responses from the API are not represented here. They are surfaced through
/// [`TwitterResponse::error`](crate::TwitterResponse::error) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be delivered or the response could not be read, e.g. because of a
    /// DNS failure, a refused connection or a timeout.
    #[error("HTTP transport error")]
    Transport(#[source] BoxError),
    /// The request could not be constructed.
    #[error("failed to build the HTTP request")]
    Http(#[from] http::Error),
    /// The segment list is malformed.
    #[error("invalid URL segments: {0}")]
    Segments(String),
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("failed to parse the configuration")]
    Config(#[from] toml::de::Error),
    /// The cancellation signal passed to `TwitterService::execute_until` fired first.
    #[error("the request has been cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn transport<E: Into<BoxError>>(e: E) -> Self {
        Error::Transport(e.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(*self, Error::Transport(_))
    }
}
