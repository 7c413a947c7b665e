use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemini_client::GeminiClient;
use sentiment_client::SentimentClient;
use tokopedia_client::{LinkResolver, TokopediaClient};
use ulascan_api::{create_app, AppState};
use ulascan_common::Config;
use ulascan_engine::{Analyzer, MemoryHistoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ulascan_api=info".parse()?)
                .add_directive("ulascan_engine=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    config.log_redacted();

    // Clients hold only fixed configuration and are built once.
    let history = Arc::new(MemoryHistoryStore::new());
    let analyzer = Analyzer::new(
        Arc::new(LinkResolver::new()),
        Arc::new(TokopediaClient::new()),
        Arc::new(SentimentClient::new(&config.ml_url, &config.ml_api_key)),
        Arc::new(GeminiClient::new(&config.gemini_api_key)),
        history.clone(),
    );

    let state = Arc::new(AppState {
        analyzer,
        history,
        jwt_secret: config.jwt_secret.clone(),
    });

    let app = create_app(state);

    let addr = format!("{}:{}", config.app_host, config.app_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = addr.as_str(), "ulascan API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
