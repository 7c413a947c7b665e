//! Trait seams over the external-service clients.
//!
//! The analyzer only sees these traits, so its tests run with in-process
//! doubles: no network, no upstream endpoints. The concrete clients
//! implement them by delegation.

use async_trait::async_trait;

use gemini_client::GeminiClient;
use sentiment_client::SentimentClient;
use tokopedia_client::{LinkResolver, TokopediaClient};
use ulascan_common::{AspectScores, Product, ProductRef, Review, SentimentCounts};

// ---------------------------------------------------------------------------
// ProductLinkResolver
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ProductLinkResolver: Send + Sync {
    /// Normalize a raw product link into canonical identifiers.
    async fn resolve(&self, raw_url: &str) -> tokopedia_client::Result<ProductRef>;
}

#[async_trait]
impl ProductLinkResolver for LinkResolver {
    async fn resolve(&self, raw_url: &str) -> tokopedia_client::Result<ProductRef> {
        LinkResolver::resolve(self, raw_url).await
    }
}

// ---------------------------------------------------------------------------
// ReviewSource
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch product metadata.
    async fn product(&self, product: &ProductRef) -> tokopedia_client::Result<Product>;

    /// Fetch the review sequence for a product, capped upstream.
    async fn reviews(
        &self,
        product_id: &str,
        product_url: &str,
    ) -> tokopedia_client::Result<Vec<Review>>;

    /// Fetch the shop's avatar image URL.
    async fn shop_avatar(&self, shop_domain: &str) -> tokopedia_client::Result<String>;
}

#[async_trait]
impl ReviewSource for TokopediaClient {
    async fn product(&self, product: &ProductRef) -> tokopedia_client::Result<Product> {
        self.get_product(product).await
    }

    async fn reviews(
        &self,
        product_id: &str,
        product_url: &str,
    ) -> tokopedia_client::Result<Vec<Review>> {
        self.get_reviews(product_id, product_url).await
    }

    async fn shop_avatar(&self, shop_domain: &str) -> tokopedia_client::Result<String> {
        self.get_shop_avatar(shop_domain).await
    }
}

// ---------------------------------------------------------------------------
// SentimentModel
// ---------------------------------------------------------------------------

#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Classify review texts into positive/negative counts.
    async fn predict(&self, statements: &[String]) -> sentiment_client::Result<SentimentCounts>;
}

#[async_trait]
impl SentimentModel for SentimentClient {
    async fn predict(&self, statements: &[String]) -> sentiment_client::Result<SentimentCounts> {
        SentimentClient::predict(self, statements).await
    }
}

// ---------------------------------------------------------------------------
// ReviewInsights
// ---------------------------------------------------------------------------

#[async_trait]
pub trait ReviewInsights: Send + Sync {
    /// Score the four review aspects from the concatenated review text.
    async fn analyze(&self, reviews: &str) -> gemini_client::Result<AspectScores>;

    /// Summarize the concatenated review text.
    async fn summarize(&self, reviews: &str) -> gemini_client::Result<String>;
}

#[async_trait]
impl ReviewInsights for GeminiClient {
    async fn analyze(&self, reviews: &str) -> gemini_client::Result<AspectScores> {
        GeminiClient::analyze(self, reviews).await
    }

    async fn summarize(&self, reviews: &str) -> gemini_client::Result<String> {
        GeminiClient::summarize(self, reviews).await
    }
}
