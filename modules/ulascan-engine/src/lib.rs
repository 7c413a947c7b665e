pub mod analyzer;
pub mod error;
pub mod history;
pub mod traits;

pub use analyzer::Analyzer;
pub use error::{AnalysisError, Result};
pub use history::{HistoryError, HistoryQuery, HistoryStore, MemoryHistoryStore};
pub use traits::{ProductLinkResolver, ReviewInsights, ReviewSource, SentimentModel};
