use thiserror::Error;

use gemini_client::GeminiError;
use sentiment_client::SentimentError;
use tokopedia_client::TokopediaError;

use crate::history::HistoryError;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// One variant per pipeline step, so callers see which step failed even
/// when several enrichment branches failed in the same request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to resolve product link: {0}")]
    Resolve(#[source] TokopediaError),

    #[error("failed to fetch product: {0}")]
    Product(#[source] TokopediaError),

    #[error("failed to fetch product reviews: {0}")]
    Reviews(#[source] TokopediaError),

    #[error("failed to fetch shop avatar: {0}")]
    ShopAvatar(#[source] TokopediaError),

    #[error("sentiment prediction failed: {0}")]
    Prediction(#[from] SentimentError),

    #[error("review summarization failed: {0}")]
    Summarization(#[source] GeminiError),

    #[error("aspect analysis failed: {0}")]
    AspectAnalysis(#[source] GeminiError),

    #[error("failed to record analysis history: {0}")]
    History(#[from] HistoryError),
}
