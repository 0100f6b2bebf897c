//! Wire shapes for assessment payloads.
//!
//! Field names follow the assessment front end (camelCase). Deserialization is the
//! whole of request validation: no cross-field checks are made, so
//! `timeDistribution` and `confidenceLevels` may disagree in length with `responses`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingData {
    pub total_time: i64,
    pub average_time_per_question: f64,
    pub time_distribution: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralMetrics {
    pub hesitation_patterns: Vec<i64>,
    pub changes_made: i64,
    pub confidence_levels: Vec<i64>,
}

/// Body of `POST /analyze-behavior`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub assessment_type: String,
    pub responses: Vec<String>,
    pub timing_data: TimingData,
    pub behavioral_metrics: BehavioralMetrics,
}

/// A chosen label and its confidence, whichever backend produced it.
/// Serialized as the `POST /technicalanalysis` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLabel {
    #[serde(rename = "top_label")]
    pub label: String,
    pub score: f64,
}

/// One classified response. Field names match what the dashboard reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub response: String,
    pub top_label: String,
    pub score: f64,
}

impl ClassificationResult {
    pub fn new(response: &str, top: TopLabel) -> Self {
        Self {
            response: response.to_string(),
            top_label: top.label,
            score: top.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBehaviorResponse {
    pub assessment_type: String,
    pub classified_responses: Vec<ClassificationResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionData {
    pub click_count: Option<i64>,
    pub keystrokes: Option<i64>,
    pub pause_duration: Option<f64>,
    pub revisited: Option<bool>,
    pub confidence_level: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralIndicators {
    pub hesitation_time: Option<f64>,
    pub response_pattern: Option<String>,
    pub changes_made: Option<i64>,
}

/// A stored answer to one assessment question. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseItem {
    pub question_id: Option<String>,
    pub user_response: Option<String>,
    pub is_correct: Option<bool>,
    pub time_taken: Option<f64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub interaction_data: Option<InteractionData>,
    pub behavioral_indicators: Option<BehavioralIndicators>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
    pub skill_name: String,
    /// 0.0 – 1.0
    pub score: f64,
    pub confidence: Option<f64>,
}

/// Body of `POST /improvement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRequest {
    pub responses: Vec<ResponseItem>,
    pub skills_assessed: Vec<SkillAssessment>,
}

/// `{markdown}` on success, `{error, markdown}` with the fallback text on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub markdown: String,
}
