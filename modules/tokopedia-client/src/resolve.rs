use std::time::Duration;

use reqwest::header;
use url::Url;

use ulascan_common::ProductRef;

use crate::error::{Result, TokopediaError};

pub const PRIMARY_DOMAIN: &str = "www.tokopedia.com";
const BARE_DOMAIN: &str = "tokopedia.com";
const SHORT_LINK_HOST: &str = "tokopedia.link";

/// The short-link host serves bot traffic an interstitial page instead of a
/// redirect, so the expansion requests present a mobile browser.
const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";

/// Normalizes a product link: expands short links, validates the domain,
/// and splits the path into shop domain and product key.
pub struct LinkResolver {
    http: reqwest::Client,
}

impl LinkResolver {
    pub fn new() -> Self {
        // Redirects are resolved manually, one Location header at a time.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }

    /// Resolve a raw product link into a canonical [`ProductRef`].
    /// Already-canonical URLs are resolved without any network calls.
    pub async fn resolve(&self, raw_url: &str) -> Result<ProductRef> {
        if raw_url.is_empty() {
            return Err(TokopediaError::MissingUrl);
        }

        let mut parsed = Url::parse(raw_url)?;

        if parsed.host_str() == Some(SHORT_LINK_HOST) {
            let expanded = self.expand_short_link(raw_url).await?;
            parsed = Url::parse(&expanded)?;
        }

        let host = parsed.host_str().unwrap_or_default();
        if host != PRIMARY_DOMAIN && host != BARE_DOMAIN {
            return Err(TokopediaError::UnsupportedDomain(host.to_string()));
        }

        let segments: Vec<&str> = parsed.path().split('/').collect();
        if segments.len() < 3 {
            return Err(TokopediaError::MalformedPath);
        }

        let shop_domain = segments[1].to_string();
        let product_key = segments[2].to_string();
        let url = format!("https://{PRIMARY_DOMAIN}/{shop_domain}/{product_key}");

        Ok(ProductRef {
            shop_domain,
            product_key,
            url,
        })
    }

    /// Expand a short link by following exactly two redirect hops manually.
    /// The short-link host answers with an interstitial redirect and the
    /// interstitial redirects again to the real product page.
    pub async fn expand_short_link(&self, short_url: &str) -> Result<String> {
        let interstitial = self.redirect_target(short_url).await?;
        let final_url = self.redirect_target(&interstitial).await?;

        tracing::debug!(short_url, final_url = final_url.as_str(), "Expanded short link");
        Ok(final_url)
    }

    async fn redirect_target(&self, url: &str) -> Result<String> {
        let resp = self
            .http
            .get(url)
            .header(header::USER_AGENT, MOBILE_USER_AGENT)
            .send()
            .await?;

        if resp.status().as_u16() >= 400 {
            return Err(TokopediaError::RedirectMissing);
        }

        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .ok_or(TokopediaError::RedirectMissing)
    }
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LinkResolver {
        LinkResolver::new()
    }

    #[tokio::test]
    async fn resolves_canonical_url() {
        let r = resolver()
            .resolve("https://www.tokopedia.com/someshop/somekey")
            .await
            .unwrap();
        assert_eq!(r.shop_domain, "someshop");
        assert_eq!(r.product_key, "somekey");
        assert_eq!(r.url, "https://www.tokopedia.com/someshop/somekey");
    }

    #[tokio::test]
    async fn strips_query_and_extra_segments() {
        let r = resolver()
            .resolve("https://www.tokopedia.com/someshop/somekey?extParam=1")
            .await
            .unwrap();
        assert_eq!(r.url, "https://www.tokopedia.com/someshop/somekey");

        let r2 = resolver()
            .resolve("https://www.tokopedia.com/someshop/somekey/review?src=promo")
            .await
            .unwrap();
        assert_eq!(r, r2);
    }

    #[tokio::test]
    async fn accepts_both_host_variants() {
        let a = resolver()
            .resolve("https://www.tokopedia.com/shop/key")
            .await
            .unwrap();
        let b = resolver()
            .resolve("https://tokopedia.com/shop/key")
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn rejects_empty_input() {
        let err = resolver().resolve("").await.unwrap_err();
        assert!(matches!(err, TokopediaError::MissingUrl));
    }

    #[tokio::test]
    async fn rejects_unparseable_url() {
        let err = resolver().resolve("not a url").await.unwrap_err();
        assert!(matches!(err, TokopediaError::MalformedUrl(_)));
    }

    #[tokio::test]
    async fn rejects_foreign_domain() {
        let err = resolver()
            .resolve("https://www.bukalapak.com/shop/key")
            .await
            .unwrap_err();
        assert!(matches!(err, TokopediaError::UnsupportedDomain(_)));
    }

    #[tokio::test]
    async fn rejects_short_path() {
        let err = resolver()
            .resolve("https://www.tokopedia.com/shoponly")
            .await
            .unwrap_err();
        assert!(matches!(err, TokopediaError::MalformedPath));
    }
}
