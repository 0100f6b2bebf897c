// LLM prompt constants for technical-trait classification.

/// Technical classification prompt template. Replace `{response}` before sending.
pub const TECHNICAL_PROMPT_TEMPLATE: &str = r#"Classify the problem-solving style shown in the following answer to a technical assessment question.

Pick exactly ONE label from: analytical, methodical, intuitive, systematic.

Return a JSON object with this EXACT schema (no extra fields):
{"label": "analytical", "score": 0.87}

Rules:
- "label" must be one of the four labels above, lower-case
- "score" is your confidence between 0 and 1

ANSWER:
{response}"#;
