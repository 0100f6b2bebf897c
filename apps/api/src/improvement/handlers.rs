use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::extract::ValidJson;
use crate::improvement::generator::suggest;
use crate::models::assessment::{ImprovementOutput, ImprovementRequest};
use crate::state::AppState;

/// POST /improvement
///
/// Always 200 once the body validates; model failures come back in `error`.
pub async fn handle_improvement(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ImprovementRequest>,
) -> Result<Json<ImprovementOutput>, AppError> {
    info!(
        "Improvement request: {} responses, {} skills",
        request.responses.len(),
        request.skills_assessed.len()
    );

    let output = suggest(state.llm.as_ref(), &request.skills_assessed).await;
    Ok(Json(output))
}
