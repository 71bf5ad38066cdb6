use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("proxy error: {0}")]
    Proxy(#[from] ProxyError),
    #[error("bad response: {0} {1}")]
    Status(u16, String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("playback error: {0}")]
    Playback(String),
}

impl Error {
    /// Build a [Error::Status] from a non-200 status code.
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        Self::Status(
            status.as_u16(),
            status.canonical_reason().unwrap_or("").to_owned(),
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProxyError {
    #[error("invalid proxy format: {0}")]
    Malformed(String),
    #[error("proxy pool is empty")]
    EmptyPool,
}
