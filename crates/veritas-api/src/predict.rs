use axum::{Json, extract::State};

use veritas_inference::prompt;
use veritas_types::api::{PredictRequest, PredictResponse};

use crate::AppState;
use crate::error::ApiError;

/// Run the full pipeline for one message: extract the claim, gather
/// evidence, compose the prompt, and classify. Evidence sources degrade
/// internally; anything that still fails here (inference, transport)
/// surfaces as a generic server error carrying the cause.
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let response = run_pipeline(&state, &req.message)
        .await
        .map_err(|e| ApiError::Prediction(format!("{e:#}")))?;

    Ok(Json(PredictResponse { response }))
}

async fn run_pipeline(state: &AppState, message: &str) -> anyhow::Result<String> {
    let claim = state.extractor.extract(message);

    let bundle = state.evidence.gather(&claim).await;
    let evidence = bundle.aggregate();

    let system_prompt = prompt::compose(message, &evidence);

    state
        .inference
        .classify(system_prompt, message.to_string())
        .await
}
