//! Per-response label dispatch.
//!
//! `"technical"` assessments go to the hosted model with a fixed prompt; everything
//! else goes to the zero-shot classifier with the behavioral label set. Responses are
//! classified one at a time, in order, so output index `i` always matches input `i`.

use tracing::info;

use crate::classification::technical::classify_technical;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::assessment::ClassificationResult;
use crate::zero_shot::ZeroShotClassifier;

pub const TECHNICAL_ASSESSMENT: &str = "technical";

pub const BEHAVIORAL_LABELS: [&str; 4] = ["collaborative", "independent", "adaptive", "rigid"];

/// Which label source handles an assessment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Technical,
    Behavioral,
}

impl Route {
    /// Exact, case-sensitive match on `"technical"`.
    pub fn for_assessment(assessment_type: &str) -> Self {
        if assessment_type == TECHNICAL_ASSESSMENT {
            Route::Technical
        } else {
            Route::Behavioral
        }
    }
}

pub async fn classify(
    llm: &dyn TextGenerator,
    classifier: &dyn ZeroShotClassifier,
    assessment_type: &str,
    responses: &[String],
) -> Result<Vec<ClassificationResult>, AppError> {
    let route = Route::for_assessment(assessment_type);
    info!(
        "Classifying {} responses for assessment type '{}' via {:?}",
        responses.len(),
        assessment_type,
        route
    );

    let mut results = Vec::with_capacity(responses.len());
    for response in responses {
        let top = match route {
            Route::Technical => classify_technical(llm, response).await,
            Route::Behavioral => classifier.classify(response, &BEHAVIORAL_LABELS).await?,
        };
        results.push(ClassificationResult::new(response, top));
    }

    info!("Classification results: {:?}", results);
    Ok(results)
}
