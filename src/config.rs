use std::env;

pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub readme_sample_size: usize,
    pub ai_context_size: usize,
}

impl Config {
    /// Reads credentials and knobs from the environment. Every credential is
    /// optional: unauthenticated GitHub access and heuristic-only scoring are
    /// both valid runs.
    pub fn from_env() -> Self {
        let github_token = first_non_empty(&["GITHUB_TOKEN", "GH_TOKEN"]);
        let ai_api_key = first_non_empty(&["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"]);

        let ai_model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string());

        let readme_sample_size = env::var("README_SAMPLE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let ai_context_size = env::var("AI_CONTEXT_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            github_token,
            ai_api_key,
            ai_model,
            readme_sample_size,
            ai_context_size,
        }
    }
}

fn first_non_empty(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| env::var(key).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many top-starred repositories get their README sampled.
    pub readme_sample_size: usize,
    /// How many top-starred repositories are described to the AI reviewer.
    pub ai_context_size: usize,
    /// README snippets are cut to this many characters in the prompt.
    pub readme_snippet_chars: usize,
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            readme_sample_size: 3,
            ai_context_size: 5,
            readme_snippet_chars: 1000,
            show_progress: false,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            readme_sample_size: config.readme_sample_size,
            ai_context_size: config.ai_context_size,
            ..Self::default()
        }
    }
}
