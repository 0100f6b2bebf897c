//! Axum route handlers for behavior and technical classification.

use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::classification::router::classify;
use crate::classification::technical::classify_technical;
use crate::errors::AppError;
use crate::extract::ValidJson;
use crate::models::assessment::{AnalyzeBehaviorResponse, AssessmentRequest, TopLabel};
use crate::state::AppState;

/// POST /analyze-behavior
///
/// Classifies every response in the assessment. Output order matches input order.
pub async fn handle_analyze_behavior(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<AssessmentRequest>,
) -> Result<Json<AnalyzeBehaviorResponse>, AppError> {
    info!("Received assessment: {:?}", request);

    let classified_responses = classify(
        state.llm.as_ref(),
        state.classifier.as_ref(),
        &request.assessment_type,
        &request.responses,
    )
    .await?;

    Ok(Json(AnalyzeBehaviorResponse {
        assessment_type: request.assessment_type,
        classified_responses,
    }))
}

/// POST /technicalanalysis
///
/// Body is a JSON string literal or, failing that, the raw text itself.
pub async fn handle_technical_analysis(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TopLabel>, AppError> {
    let body = String::from_utf8(body.to_vec())
        .map_err(|_| AppError::Validation("request body must be valid UTF-8".to_string()))?;
    let response = response_text(body);
    if response.trim().is_empty() {
        return Err(AppError::Validation("response text cannot be empty".to_string()));
    }

    let top = classify_technical(state.llm.as_ref(), &response).await;
    info!("Technical analysis: {} ({:.2})", top.label, top.score);
    Ok(Json(top))
}

fn response_text(body: String) -> String {
    serde_json::from_str::<String>(&body).unwrap_or(body)
}
