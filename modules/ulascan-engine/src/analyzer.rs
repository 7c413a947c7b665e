use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use ulascan_common::{
    AnalysisResult, AspectScores, HistoryDraft, Product, ProductRef, Review, SentimentCounts,
};

use crate::error::{AnalysisError, Result};
use crate::history::HistoryStore;
use crate::traits::{ProductLinkResolver, ReviewInsights, ReviewSource, SentimentModel};

/// The analysis pipeline: resolve a product link, pull product metadata and
/// reviews, fan the review text out to the enrichment backends, and compose
/// one result. Holds only wiring; safe to share across requests.
pub struct Analyzer {
    resolver: Arc<dyn ProductLinkResolver>,
    source: Arc<dyn ReviewSource>,
    sentiment: Arc<dyn SentimentModel>,
    insights: Arc<dyn ReviewInsights>,
    history: Arc<dyn HistoryStore>,
}

/// Output slots of the enrichment fan-out.
struct Enrichment {
    shop_avatar: String,
    counts: SentimentCounts,
    aspects: AspectScores,
    summary: String,
}

impl Analyzer {
    pub fn new(
        resolver: Arc<dyn ProductLinkResolver>,
        source: Arc<dyn ReviewSource>,
        sentiment: Arc<dyn SentimentModel>,
        insights: Arc<dyn ReviewInsights>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            resolver,
            source,
            sentiment,
            insights,
            history,
        }
    }

    /// Analyze a product link without persisting anything.
    pub async fn analyze(&self, product_url: &str) -> Result<AnalysisResult> {
        let (_, _, result) = self.run(product_url).await?;
        Ok(result)
    }

    /// Analyze a product link and record the outcome in the user's history.
    /// A history failure surfaces as the request error even though the
    /// analysis itself completed.
    pub async fn analyze_for_user(
        &self,
        product_url: &str,
        user_id: Uuid,
    ) -> Result<AnalysisResult> {
        let (product_ref, product_id, result) = self.run(product_url).await?;

        let draft = HistoryDraft {
            user_id,
            product_id,
            url: product_ref.url,
            product_name: result.product_name.clone(),
            review_count: result.review_count,
            classified_count: result.classified_count,
            rating_avg: result.rating_avg,
            count_positive: result.count_positive,
            count_negative: result.count_negative,
            packaging: result.packaging,
            delivery: result.delivery,
            admin_response: result.admin_response,
            product_condition: result.product_condition,
            summary: result.summary.clone(),
        };
        self.history.replace(draft).await?;

        Ok(result)
    }

    async fn run(&self, product_url: &str) -> Result<(ProductRef, String, AnalysisResult)> {
        let product_ref = self
            .resolver
            .resolve(product_url)
            .await
            .map_err(AnalysisError::Resolve)?;
        info!(url = product_ref.url.as_str(), "Resolved product link");

        let product = self
            .source
            .product(&product_ref)
            .await
            .map_err(AnalysisError::Product)?;
        let product_id = product.product_id.clone();

        let reviews = self
            .source
            .reviews(&product_id, &product_ref.url)
            .await
            .map_err(AnalysisError::Reviews)?;
        info!(count = reviews.len(), "Fetched reviews");

        let statements: Vec<String> = reviews.iter().map(|r| r.message.clone()).collect();
        let blob = review_blob(&reviews);

        let enrichment = self
            .enrich(&product_ref.shop_domain, &statements, &blob)
            .await?;

        let result = compose(product, &reviews, enrichment);
        Ok((product_ref, product_id, result))
    }

    /// Fan out the four enrichment operations and join. Each branch writes
    /// its own slot and the join waits for all four, so total latency is
    /// the slowest branch. Failures surface in fixed priority order
    /// (avatar, prediction, summarization, aspect analysis); only the
    /// first one is reported.
    async fn enrich(
        &self,
        shop_domain: &str,
        statements: &[String],
        blob: &str,
    ) -> Result<Enrichment> {
        let (avatar, counts, aspects, summary) = tokio::join!(
            self.source.shop_avatar(shop_domain),
            self.sentiment.predict(statements),
            self.insights.analyze(blob),
            self.insights.summarize(blob),
        );

        let shop_avatar = avatar.map_err(AnalysisError::ShopAvatar)?;
        let counts = counts.map_err(AnalysisError::Prediction)?;
        let summary = summary.map_err(AnalysisError::Summarization)?;
        let aspects = aspects.map_err(AnalysisError::AspectAnalysis)?;

        Ok(Enrichment {
            shop_avatar,
            counts,
            aspects,
            summary,
        })
    }
}

/// All review messages joined with newline separators, in original order.
/// Shared input for the aspect analyzer and the summarizer.
fn review_blob(reviews: &[Review]) -> String {
    let mut blob = String::new();
    for review in reviews {
        blob.push_str(&review.message);
        blob.push('\n');
    }
    blob
}

fn compose(product: Product, reviews: &[Review], enrichment: Enrichment) -> AnalysisResult {
    let review_count = reviews.len() as i64;
    let rating_avg = if reviews.is_empty() {
        0.0
    } else {
        let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
        sum as f64 / review_count as f64
    };

    AnalysisResult {
        product_name: product.name,
        product_description: product.description,
        review_count,
        // The classifier may abstain, so this is the classified total, not
        // the fetched total.
        classified_count: enrichment.counts.positive + enrichment.counts.negative,
        rating_avg,
        image_urls: product.image_urls,
        shop_name: product.shop_name,
        shop_avatar: enrichment.shop_avatar,
        count_negative: enrichment.counts.negative,
        count_positive: enrichment.counts.positive,
        packaging: enrichment.aspects.packaging,
        delivery: enrichment.aspects.delivery,
        admin_response: enrichment.aspects.admin_response,
        product_condition: enrichment.aspects.product_condition,
        summary: enrichment.summary,
    }
}
