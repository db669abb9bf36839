pub mod languages;
pub mod scoring;
pub mod selection;
pub mod fallback;
pub mod pipeline;

pub use languages::calculate_language_stats;
pub use scoring::{calculate_profile_score, ScoringEngine};
pub use selection::top_repositories;
pub use fallback::{
    resolve_review, ReviewContent, DEFAULT_SUGGESTIONS, MAX_LISTED_FINDINGS, MAX_LISTED_LANGUAGES,
};
pub use pipeline::AnalysisPipeline;
