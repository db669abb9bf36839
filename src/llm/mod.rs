pub mod provider;
pub mod gemini;
pub mod prompts;
pub mod parser;
pub mod review;

pub use provider::LLMProvider;
pub use gemini::GeminiProvider;
pub use prompts::{ProfileReviewRequest, RepoContext};
pub use review::{AICredential, ProfileReviewer, ReviewOutcome};
