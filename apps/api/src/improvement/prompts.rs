// LLM prompt constants for improvement suggestions.

/// System prompt for improvement suggestions — Markdown output, no preamble.
pub const IMPROVEMENT_SYSTEM: &str = "You are a supportive career coach reviewing skill \
    assessment results. Respond in Markdown only, using exactly the section format you are \
    given. Do NOT add an introduction or a closing remark.";

/// Improvement prompt template.
/// Replace: {threshold}, {skills_json}
pub const IMPROVEMENT_PROMPT_TEMPLATE: &str = r#"Below are a candidate's skill assessment results. Each score is between 0 and 1.

SKILLS:
{skills_json}

For EACH skill, in the order given:
- If the score is below {threshold}: give 2-3 concrete, actionable tips to improve it.
- If the score is {threshold} or above: affirm the strength in one sentence, then give 1-2 suggestions for further growth.

Use this EXACT Markdown format for every skill:

### Skill: <skill name>
**Score:** <score>
_Summary_: <one-sentence summary of where the candidate stands>
**Tips to Improve:**
- **<short tip title>**: <one or two sentences of detail>
- **<short tip title>**: <one or two sentences of detail>

HARD RULES:
1. One section per skill, nothing before the first section, nothing after the last
2. Copy the skill name and score exactly as given
3. Keep every tip specific to that skill"#;

/// Returned in place of model output when the call fails.
pub const IMPROVEMENT_FALLBACK_MARKDOWN: &str = "We couldn't generate personalized improvement \
    suggestions right now. Please try again in a few minutes.";
