use thiserror::Error;

pub type Result<T> = std::result::Result<T, SentimentError>;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("network error: {0}")]
    Network(String),

    #[error("internal server error from the prediction service")]
    ModelServer,

    #[error("failed to decode prediction response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SentimentError {
    fn from(err: reqwest::Error) -> Self {
        SentimentError::Network(err.to_string())
    }
}
