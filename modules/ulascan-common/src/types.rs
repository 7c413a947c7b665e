use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Product types ---

/// Canonical reference to a product page, produced by the link resolver.
/// `url` is the re-composed `https://www.tokopedia.com/<shop>/<key>` form
/// with query parameters and extra path segments dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    pub shop_domain: String,
    pub product_key: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub shop_name: String,
    pub image_urls: Vec<String>,
}

/// A single product review. Ratings are 1..=5 stars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub message: String,
    pub rating: i32,
}

// --- Enrichment outcomes ---

/// Positive/negative counts from the sentiment classifier. The classifier
/// may abstain on some texts, so the sum need not equal the review count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: i64,
    #[serde(rename = "Negative")]
    pub negative: i64,
}

/// Per-aspect quality scores in [0, 100], computed upstream as
/// `positive / (positive + negative) * 100` for each aspect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectScores {
    pub packaging: f32,
    pub delivery: f32,
    pub admin_response: f32,
    pub product_condition: f32,
}

// --- Composed result ---

/// The full analysis returned to the caller. Field names on the wire keep
/// the original contract: `rating` is the number of fetched reviews,
/// `ulasan` the number the classifier actually labeled, `bintang` the
/// average star rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub product_name: String,
    pub product_description: String,
    #[serde(rename = "rating")]
    pub review_count: i64,
    #[serde(rename = "ulasan")]
    pub classified_count: i64,
    #[serde(rename = "bintang")]
    pub rating_avg: f64,
    pub image_urls: Vec<String>,
    pub shop_name: String,
    pub shop_avatar: String,
    pub count_negative: i64,
    pub count_positive: i64,
    pub packaging: f32,
    pub delivery: f32,
    pub admin_response: f32,
    pub product_condition: f32,
    pub summary: String,
}

// --- History types ---

/// Persistence-ready record handed to the history store after an
/// authenticated analysis. One record per (user, product): a prior record
/// for the same pair is replaced, not duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDraft {
    pub user_id: Uuid,
    pub product_id: String,
    pub url: String,
    pub product_name: String,
    #[serde(rename = "rating")]
    pub review_count: i64,
    #[serde(rename = "ulasan")]
    pub classified_count: i64,
    #[serde(rename = "bintang")]
    pub rating_avg: f64,
    pub count_positive: i64,
    pub count_negative: i64,
    pub packaging: f32,
    pub delivery: f32,
    pub admin_response: f32,
    pub product_condition: f32,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: String,
    pub url: String,
    pub product_name: String,
    #[serde(rename = "rating")]
    pub review_count: i64,
    #[serde(rename = "ulasan")]
    pub classified_count: i64,
    #[serde(rename = "bintang")]
    pub rating_avg: f64,
    pub count_positive: i64,
    pub count_negative: i64,
    pub packaging: f32,
    pub delivery: f32,
    pub admin_response: f32,
    pub product_condition: f32,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// One page of a user's analysis history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPage {
    pub histories: Vec<HistoryRecord>,
    pub page: u32,
    pub pages: u32,
    pub limit: u32,
    pub total: u64,
}
