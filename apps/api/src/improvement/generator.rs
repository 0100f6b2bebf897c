//! Turns per-skill scores into a coaching prompt and returns the model's Markdown as-is.

use serde::Serialize;
use tracing::{error, info};

use crate::improvement::prompts::{
    IMPROVEMENT_FALLBACK_MARKDOWN, IMPROVEMENT_PROMPT_TEMPLATE, IMPROVEMENT_SYSTEM,
};
use crate::llm_client::TextGenerator;
use crate::models::assessment::{ImprovementOutput, SkillAssessment};

/// Scores below this get improvement tips; at or above get affirmation plus growth ideas.
pub const IMPROVEMENT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptSkill<'a> {
    skill_name: &'a str,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
}

/// Builds the single prompt sent to the model. Empty skill lists still produce a prompt.
pub fn build_improvement_prompt(skills: &[SkillAssessment]) -> String {
    let rows: Vec<PromptSkill<'_>> = skills
        .iter()
        .map(|s| PromptSkill {
            skill_name: &s.skill_name,
            score: s.score,
            confidence: s.confidence,
        })
        .collect();
    let skills_json = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string());

    IMPROVEMENT_PROMPT_TEMPLATE
        .replace("{threshold}", &IMPROVEMENT_THRESHOLD.to_string())
        .replace("{skills_json}", &skills_json)
}

/// Returns the model's Markdown unmodified, or the fallback plus the error message.
pub async fn suggest(llm: &dyn TextGenerator, skills: &[SkillAssessment]) -> ImprovementOutput {
    let prompt = build_improvement_prompt(skills);

    match llm.generate(&prompt, IMPROVEMENT_SYSTEM).await {
        Ok(markdown) => {
            info!("Generated improvement suggestions for {} skills", skills.len());
            ImprovementOutput {
                error: None,
                markdown,
            }
        }
        Err(e) => {
            error!("Improvement suggestion generation failed: {e}");
            ImprovementOutput {
                error: Some(e.to_string()),
                markdown: IMPROVEMENT_FALLBACK_MARKDOWN.to_string(),
            }
        }
    }
}
