use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokopediaError>;

#[derive(Debug, Error)]
pub enum TokopediaError {
    #[error("product url is required")]
    MissingUrl,

    #[error("invalid product url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("short link redirect did not yield a usable Location header")]
    RedirectMissing,

    #[error("invalid domain {0}, only tokopedia.com urls are accepted")]
    UnsupportedDomain(String),

    #[error("invalid product url format")]
    MalformedPath,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("{0} not found")]
    NotFound(&'static str),
}

impl From<reqwest::Error> for TokopediaError {
    fn from(err: reqwest::Error) -> Self {
        TokopediaError::Network(err.to_string())
    }
}
