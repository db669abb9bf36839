pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod llm;
pub mod analysis;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use llm::{GeminiProvider, LLMProvider, ProfileReviewer, ReviewOutcome};
pub use analysis::AnalysisPipeline;
