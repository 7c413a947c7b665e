pub mod error;
mod queries;
pub mod resolve;
mod types;

pub use error::{Result, TokopediaError};
pub use resolve::{LinkResolver, PRIMARY_DOMAIN};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;

use ulascan_common::{Product, ProductRef, Review};

use types::*;

const GRAPHQL_URL: &str = "https://gql.tokopedia.com/graphql/";

/// The endpoint only answers requests that look like the product web client.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

const REVIEW_PAGE_SIZE: usize = 50;
const REVIEW_PAGE_CAP: u32 = 2;

/// Client for the upstream product, review, and shop queries. Holds only
/// fixed configuration; safe to share across requests.
pub struct TokopediaClient {
    http: reqwest::Client,
    base_url: String,
}

impl TokopediaClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: GRAPHQL_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Fetch product metadata via the layout query.
    pub async fn get_product(&self, product: &ProductRef) -> Result<Product> {
        let payload = serde_json::json!({
            "operationName": "PDPGetLayoutQuery",
            "variables": {
                "shopDomain": product.shop_domain,
                "productKey": product.product_key,
                "apiVersion": 1,
            },
            "query": queries::PRODUCT_LAYOUT,
        });

        let resp: GraphqlResponse<ProductLayoutData> =
            self.post_query(&payload, &product.url, true).await?;

        if !resp.errors.is_empty() {
            return Err(TokopediaError::NotFound("product"));
        }

        let layout = resp
            .data
            .and_then(|d| d.pdp_get_layout)
            .ok_or(TokopediaError::NotFound("product"))?;

        extract_product(layout)
    }

    /// Fetch up to two pages of reviews, newest first. Stops early when a
    /// page comes back short (end of data). An empty result is not an error.
    pub async fn get_reviews(&self, product_id: &str, product_url: &str) -> Result<Vec<Review>> {
        let mut all_reviews = Vec::new();

        for page in 1..=REVIEW_PAGE_CAP {
            let payload = serde_json::json!({
                "operationName": "productReviewList",
                "variables": {
                    "productID": product_id,
                    "page": page,
                    "limit": REVIEW_PAGE_SIZE,
                    "sortBy": "create_time desc",
                },
                "query": queries::REVIEW_LIST,
            });

            let resp: GraphqlResponse<ReviewListData> =
                self.post_query(&payload, product_url, false).await?;

            let list = resp.data.map(|d| d.review_list.list).unwrap_or_default();
            let page_len = list.len();

            all_reviews.extend(list.into_iter().map(|item| Review {
                message: item.message,
                rating: item.product_rating,
            }));

            if page_len < REVIEW_PAGE_SIZE {
                break;
            }
        }

        tracing::debug!(product_id, count = all_reviews.len(), "Fetched reviews");
        Ok(all_reviews)
    }

    /// Fetch the shop's avatar image URL via the shop-info query.
    pub async fn get_shop_avatar(&self, shop_domain: &str) -> Result<String> {
        let payload = serde_json::json!({
            "operationName": "ShopInfoCore",
            "variables": {
                "id": 0,
                "domain": shop_domain,
            },
            "query": queries::SHOP_INFO,
        });

        let referer = format!("https://{PRIMARY_DOMAIN}/{shop_domain}");
        let resp: GraphqlResponse<ShopInfoData> = self.post_query(&payload, &referer, true).await?;

        resp.data
            .and_then(|d| d.shop_info.result.into_iter().next())
            .map(|entry| entry.shop_assets.avatar)
            .ok_or(TokopediaError::NotFound("shop avatar"))
    }

    async fn post_query<T: DeserializeOwned>(
        &self,
        payload: &serde_json::Value,
        referer: &str,
        akamai: bool,
    ) -> Result<GraphqlResponse<T>> {
        let resp = self
            .http
            .post(&self.base_url)
            .headers(spoofed_headers(referer, akamai))
            .json(payload)
            .send()
            .await?;

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| TokopediaError::Decode(e.to_string()))
    }
}

impl Default for TokopediaClient {
    fn default() -> Self {
        Self::new()
    }
}

fn spoofed_headers(referer: &str, akamai: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert("X-Source", HeaderValue::from_static("tokopedia-lite"));
    headers.insert("X-Tkpd-Lite-Service", HeaderValue::from_static("zeus"));
    if let Ok(value) = HeaderValue::from_str(referer) {
        headers.insert(REFERER, value);
    }
    if akamai {
        headers.insert("X-TKPD-AKAMAI", HeaderValue::from_static("pdpGetLayout"));
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}
