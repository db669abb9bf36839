use crate::error::{Error, Result};
use crate::models::AIAnalysis;

const MAX_CLARITY: f64 = 10.0;

pub fn parse_review_response(response: &str) -> Result<AIAnalysis> {
    let json_str = extract_json(response)?;

    let mut analysis: AIAnalysis = serde_json::from_str(&json_str)
        .map_err(|e| Error::ParseError(format!("Failed to parse review: {}", e)))?;

    for feedback in &mut analysis.readme_feedback {
        if !feedback.clarity_score.is_finite() {
            return Err(Error::ParseError(format!(
                "Invalid clarity score for {}",
                feedback.repo_name
            )));
        }
        feedback.clarity_score = feedback.clarity_score.clamp(0.0, MAX_CLARITY);
    }

    Ok(analysis)
}

/// Strips markdown fences and keeps the span from the first `{` to the last `}`.
fn extract_json(text: &str) -> Result<String> {
    let cleaned = text.trim().replace("```json", "").replace("```", "");

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(cleaned[start..=end].to_string()),
        _ => Err(Error::ParseError("No valid JSON found in response".to_string())),
    }
}
