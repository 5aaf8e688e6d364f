use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use veritas_api::{AppState, AppStateInner};
use veritas_evidence::{EvidenceClient, LeadingWords};
use veritas_inference::InferenceClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veritas=debug,tower_http=debug".into()),
        )
        .init();

    // Required credentials — refuse to start without them.
    let hf_token = require_env("HF_TOKEN")?;
    let news_api_key = require_env("NEWS_API_KEY")?;
    let gnews_api_key = require_env("GNEWS_API_KEY")?;

    // Config
    let host = std::env::var("VERITAS_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("VERITAS_PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()?;
    let db_path = std::env::var("VERITAS_DB_PATH").unwrap_or_else(|_| "veritas.db".into());
    let inference_url = std::env::var("VERITAS_INFERENCE_URL").ok();

    // Init database
    let db = veritas_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state: AppState = Arc::new(AppStateInner {
        db,
        evidence: EvidenceClient::new(news_api_key, gnews_api_key)?,
        inference: InferenceClient::new(hf_token, inference_url)?,
        extractor: Box::new(LeadingWords::default()),
    });

    let app = veritas_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("veritas server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn require_env(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("{key} missing in environment or .env file"))
}
