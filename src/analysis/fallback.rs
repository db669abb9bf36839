use serde::Serialize;

use crate::models::{AIAnalysis, ProfileScore, ReadmeFeedback};

/// Generic advice shown when no AI review is available.
pub const DEFAULT_SUGGESTIONS: [&str; 4] = [
    "Add detailed READMEs to your top repositories.",
    "Contribute to open source projects to boost activity.",
    "Ensure all repositories have a description and topics.",
    "Add a professional bio and location to your profile.",
];

/// Rendered reports list at most this many strengths and weaknesses each.
pub const MAX_LISTED_FINDINGS: usize = 5;

/// Rendered reports list at most this many languages.
pub const MAX_LISTED_LANGUAGES: usize = 6;

/// What a report shows in its review sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewContent {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub readme_feedback: Vec<ReadmeFeedback>,
    pub using_fallback: bool,
}

impl ReviewContent {
    pub fn listed_strengths(&self) -> &[String] {
        &self.strengths[..self.strengths.len().min(MAX_LISTED_FINDINGS)]
    }

    pub fn listed_weaknesses(&self) -> &[String] {
        &self.weaknesses[..self.weaknesses.len().min(MAX_LISTED_FINDINGS)]
    }
}

/// Picks the AI review when present, otherwise the heuristic findings plus
/// the default suggestions and no README feedback.
pub fn resolve_review(score: &ProfileScore, ai: Option<&AIAnalysis>) -> ReviewContent {
    match ai {
        Some(analysis) => ReviewContent {
            strengths: analysis.strengths.clone(),
            weaknesses: analysis.weaknesses.clone(),
            suggestions: analysis.suggestions.clone(),
            readme_feedback: analysis.readme_feedback.clone(),
            using_fallback: false,
        },
        None => ReviewContent {
            strengths: score.details.strengths.clone(),
            weaknesses: score.details.weaknesses.clone(),
            suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            readme_feedback: Vec::new(),
            using_fallback: true,
        },
    }
}
