pub mod gemini;
pub mod openai;

/// Parses a model's text answer as JSON, tolerating a surrounding
/// markdown code fence.
pub(crate) fn parse_json_answer(text: &str) -> Result<serde_json::Value, String> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);
    serde_json::from_str(body.trim()).map_err(|e| format!("Model returned invalid JSON: {e}"))
}
