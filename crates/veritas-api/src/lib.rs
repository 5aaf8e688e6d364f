pub mod auth;
pub mod error;
pub mod predict;

use std::sync::Arc;

use axum::{Router, routing::post};

use veritas_db::Database;
use veritas_evidence::{ClaimExtraction, EvidenceClient};
use veritas_inference::InferenceClient;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub evidence: EvidenceClient,
    pub inference: InferenceClient,
    pub extractor: Box<dyn ClaimExtraction>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/predict", post(predict::predict))
        .with_state(state)
}
