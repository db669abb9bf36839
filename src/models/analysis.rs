use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::{LanguageStat, Repository};
use super::score::ProfileScore;
use super::user::GitHubUser;

/// Narrative review produced by the AI reviewer. Field names follow the
/// JSON schema the model is asked to fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIAnalysis {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub readme_feedback: Vec<ReadmeFeedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadmeFeedback {
    pub repo_name: String,
    /// 0 to 10.
    pub clarity_score: f64,
    pub feedback: String,
}

/// README text of one sampled repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeSample {
    pub repo_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub user: GitHubUser,
    pub repositories: Vec<Repository>,
    pub languages: Vec<LanguageStat>,
    pub score: ProfileScore,
    /// `None` means the AI path was unavailable and the heuristic result stands alone.
    pub ai_analysis: Option<AIAnalysis>,
    pub analysis_date: DateTime<Utc>,
}
