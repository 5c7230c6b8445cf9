use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub rejected the configured token: bad credentials")]
    BadCredentials,

    #[error("Request timed out")]
    Timeout,

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::BadCredentials)
    }
}
