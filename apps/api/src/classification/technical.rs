//! Technical-trait classification via the hosted model.
//!
//! The model is asked for strict JSON, but its output is not trusted. Recovery order:
//! 1. JSON object with a known label and a numeric score
//! 2. keyword scan for a label (default `systematic`)
//! 3. first number in the text as the score (default 0.5)
//!
//! Scores above 1 are read as percentages. A failed call yields `FAILURE_FALLBACK`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::classification::prompts::TECHNICAL_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::assessment::TopLabel;

pub const TECHNICAL_LABELS: [&str; 4] = ["analytical", "methodical", "intuitive", "systematic"];

const DEFAULT_LABEL: &str = "systematic";
const DEFAULT_SCORE: f64 = 0.5;
const FAILURE_LABEL: &str = "systematic";
const FAILURE_SCORE: f64 = 0.3;

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("score pattern is valid"));

#[derive(Debug, Deserialize)]
struct RawVerdict {
    #[serde(alias = "top_label")]
    label: String,
    #[serde(alias = "confidence")]
    score: f64,
}

/// Result used when the model call itself fails.
pub fn failure_fallback() -> TopLabel {
    TopLabel {
        label: FAILURE_LABEL.to_string(),
        score: FAILURE_SCORE,
    }
}

/// Classifies one response. Never fails: transport errors map to `failure_fallback()`.
pub async fn classify_technical(llm: &dyn TextGenerator, response: &str) -> TopLabel {
    let prompt = TECHNICAL_PROMPT_TEMPLATE.replace("{response}", response);
    match llm.generate(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(text) => parse_technical_output(&text),
        Err(e) => {
            warn!("Technical classification call failed, using fallback: {e}");
            failure_fallback()
        }
    }
}

/// Turns raw model text into a label and a score in [0, 1].
pub fn parse_technical_output(text: &str) -> TopLabel {
    if let Some(verdict) = parse_json_verdict(text) {
        return verdict;
    }

    let lowered = text.to_lowercase();
    let label = TECHNICAL_LABELS
        .iter()
        .find(|label| lowered.contains(*label))
        .copied()
        .unwrap_or(DEFAULT_LABEL);

    let score = SCORE_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(DEFAULT_SCORE);

    TopLabel {
        label: label.to_string(),
        score: normalize_score(score),
    }
}

fn parse_json_verdict(text: &str) -> Option<TopLabel> {
    let raw: RawVerdict = serde_json::from_str(strip_json_fences(text)).ok()?;
    let label = canonical_label(&raw.label)?;
    Some(TopLabel {
        label: label.to_string(),
        score: normalize_score(raw.score),
    })
}

fn canonical_label(label: &str) -> Option<&'static str> {
    let label = label.trim();
    TECHNICAL_LABELS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(label))
        .copied()
}

/// Percent-style scores (> 1) are divided by 100, then clamped into [0, 1].
pub fn normalize_score(score: f64) -> f64 {
    let score = if score > 1.0 { score / 100.0 } else { score };
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            assert!(prompt.contains("ANSWER:"));
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            })
        }
    }

    #[test]
    fn test_parses_strict_json() {
        let top = parse_technical_output(r#"{"label": "methodical", "score": 0.82}"#);
        assert_eq!(top.label, "methodical");
        assert!((top.score - 0.82).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parses_fenced_json_with_aliases() {
        let top = parse_technical_output("```json\n{\"top_label\": \"Intuitive\", \"confidence\": 0.6}\n```");
        assert_eq!(top.label, "intuitive");
        assert!((top.score - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_percentage_score_is_scaled() {
        let top = parse_technical_output(r#"{"label": "analytical", "score": 85}"#);
        assert_eq!(top.label, "analytical");
        assert!((top.score - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_json_with_keyword_and_no_number() {
        let top = parse_technical_output("The answer is clearly analytical in nature.");
        assert_eq!(top.label, "analytical");
        assert!((top.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyword_scan_follows_label_order() {
        let top = parse_technical_output("systematic, though somewhat methodical");
        assert_eq!(top.label, "methodical");
    }

    #[test]
    fn test_unknown_json_label_falls_through_to_scan() {
        let top = parse_technical_output(r#"{"label": "creative", "score": 0.9}"#);
        assert_eq!(top.label, "systematic");
        assert!((top.score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_free_text_percentage_is_scaled() {
        let top = parse_technical_output("Label: intuitive, confidence 72%");
        assert_eq!(top.label, "intuitive");
        assert!((top.score - 0.72).abs() < 1e-9);
    }

    #[test]
    fn test_no_keyword_no_number_uses_defaults() {
        let top = parse_technical_output("I cannot decide.");
        assert_eq!(top.label, "systematic");
        assert!((top.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_score_stays_in_unit_range() {
        for raw in [0.0, 0.4, 1.0, 1.5, 85.0, 250.0, -3.0] {
            let score = normalize_score(raw);
            assert!((0.0..=1.0).contains(&score), "{raw} -> {score}");
        }
        assert!((normalize_score(1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_classify_technical_uses_model_output() {
        let top = classify_technical(&CannedGenerator(r#"{"label": "systematic", "score": 0.91}"#), "I list every case").await;
        assert_eq!(top.label, "systematic");
        assert!((top.score - 0.91).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_classify_technical_failure_is_fixed_fallback() {
        let top = classify_technical(&FailingGenerator, "anything").await;
        assert_eq!(top, failure_fallback());
        assert_eq!(top.label, "systematic");
        assert!((top.score - 0.3).abs() < f64::EPSILON);
    }
}
