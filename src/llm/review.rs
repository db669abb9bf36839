use std::sync::Arc;

use crate::llm::gemini::GeminiProvider;
use crate::llm::prompts::ProfileReviewRequest;
use crate::llm::provider::LLMProvider;
use crate::models::AIAnalysis;

const SOURCE_CONTROL_TOKEN_PREFIXES: [&str; 2] = ["github_pat_", "ghp_"];

/// What the caller put in the AI key slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AICredential {
    Missing,
    /// A GitHub token was supplied where an AI service key belongs.
    SourceControlToken,
    ApiKey(String),
}

impl AICredential {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|k| !k.is_empty()) {
            None => AICredential::Missing,
            Some(key) if SOURCE_CONTROL_TOKEN_PREFIXES.iter().any(|p| key.starts_with(p)) => {
                AICredential::SourceControlToken
            }
            Some(key) => AICredential::ApiKey(key.to_string()),
        }
    }
}

/// Result of asking for an AI review. Never an error: every failure is
/// folded into `Unavailable`, except a mixed-up credential, which yields a
/// diagnostic review the user can act on.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    Reviewed(AIAnalysis),
    Misconfigured(AIAnalysis),
    Unavailable,
}

impl ReviewOutcome {
    pub fn into_analysis(self) -> Option<AIAnalysis> {
        match self {
            ReviewOutcome::Reviewed(analysis) | ReviewOutcome::Misconfigured(analysis) => {
                Some(analysis)
            }
            ReviewOutcome::Unavailable => None,
        }
    }
}

enum ReviewerMode {
    Disabled,
    Misconfigured,
    Enabled(Arc<dyn LLMProvider>),
}

pub struct ProfileReviewer {
    mode: ReviewerMode,
}

impl ProfileReviewer {
    pub fn disabled() -> Self {
        Self {
            mode: ReviewerMode::Disabled,
        }
    }

    pub fn with_provider(provider: impl LLMProvider + 'static) -> Self {
        Self {
            mode: ReviewerMode::Enabled(Arc::new(provider)),
        }
    }

    /// Builds a Gemini-backed reviewer from whatever key the caller found.
    pub fn from_api_key(api_key: Option<&str>, model: &str) -> Self {
        let mode = match AICredential::classify(api_key) {
            AICredential::Missing => {
                tracing::warn!("AI API key missing, falling back to heuristic analysis");
                ReviewerMode::Disabled
            }
            AICredential::SourceControlToken => {
                tracing::error!("A GitHub token was provided as the AI API key");
                ReviewerMode::Misconfigured
            }
            AICredential::ApiKey(key) => match GeminiProvider::new(key, model) {
                Ok(provider) => ReviewerMode::Enabled(Arc::new(provider)),
                Err(e) => {
                    tracing::warn!("Could not set up AI reviewer: {}", e);
                    ReviewerMode::Disabled
                }
            },
        };

        Self { mode }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.mode, ReviewerMode::Enabled(_))
    }

    pub async fn review(&self, request: &ProfileReviewRequest) -> ReviewOutcome {
        match &self.mode {
            ReviewerMode::Disabled => ReviewOutcome::Unavailable,
            ReviewerMode::Misconfigured => ReviewOutcome::Misconfigured(misconfiguration_notice()),
            ReviewerMode::Enabled(provider) => match provider.review_profile(request).await {
                Ok(analysis) => ReviewOutcome::Reviewed(analysis),
                Err(e) => {
                    tracing::warn!(
                        "{} review failed, falling back to heuristic analysis: {}",
                        provider.name(),
                        e
                    );
                    ReviewOutcome::Unavailable
                }
            },
        }
    }
}

fn misconfiguration_notice() -> AIAnalysis {
    AIAnalysis {
        summary: "Configuration Error: You have entered a GitHub Token into the AI API Key field. \
                  Please use a Google Gemini API Key for this feature."
            .to_string(),
        strengths: vec!["Heuristic Analysis Only".to_string()],
        weaknesses: vec!["AI Configuration Invalid".to_string()],
        suggestions: vec![
            "Get a Gemini API Key from aistudio.google.com".to_string(),
            "Update your .env file correctly".to_string(),
        ],
        readme_feedback: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::models::fixtures::user;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl LLMProvider for FailingProvider {
        async fn review_profile(&self, _request: &ProfileReviewRequest) -> Result<AIAnalysis> {
            Err(Error::LLMApi("boom".to_string()))
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    fn request() -> ProfileReviewRequest {
        ProfileReviewRequest::new(&user("octocat"), &[], Vec::new(), 5, 1000)
    }

    #[test]
    fn test_classify_credentials() {
        assert_eq!(AICredential::classify(None), AICredential::Missing);
        assert_eq!(AICredential::classify(Some("   ")), AICredential::Missing);
        assert_eq!(
            AICredential::classify(Some("ghp_123")),
            AICredential::SourceControlToken
        );
        assert_eq!(
            AICredential::classify(Some("github_pat_123")),
            AICredential::SourceControlToken
        );
        assert_eq!(
            AICredential::classify(Some("AIzaSy-key")),
            AICredential::ApiKey("AIzaSy-key".to_string())
        );
    }

    #[tokio::test]
    async fn test_github_token_yields_diagnostic_review() {
        let reviewer = ProfileReviewer::from_api_key(Some("ghp_abcdef"), "gemini-test");
        let outcome = reviewer.review(&request()).await;

        let analysis = match outcome {
            ReviewOutcome::Misconfigured(analysis) => analysis,
            other => panic!("expected diagnostic review, got {:?}", other),
        };
        assert!(analysis.weaknesses.contains(&"AI Configuration Invalid".to_string()));
        assert!(analysis.readme_feedback.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable() {
        let reviewer = ProfileReviewer::from_api_key(None, "gemini-test");
        assert!(!reviewer.is_enabled());
        assert_eq!(reviewer.review(&request()).await, ReviewOutcome::Unavailable);
    }

    #[tokio::test]
    async fn test_provider_error_is_unavailable() {
        let reviewer = ProfileReviewer::with_provider(FailingProvider);
        let outcome = reviewer.review(&request()).await;
        assert_eq!(outcome.into_analysis(), None);
    }
}
