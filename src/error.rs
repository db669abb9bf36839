use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub username is required")]
    MissingUsername,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid GitHub token. Please check your access token.")]
    Unauthorized,

    #[error("GitHub API rate limit exceeded (resets in {0}s). Please provide a valid access token.")]
    RateLimited(u64),

    #[error("No public repositories found for user {0}")]
    EmptyPortfolio(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors the user can fix by supplying a different access token.
    pub fn is_credential_problem(&self) -> bool {
        matches!(self, Error::Unauthorized | Error::RateLimited(_))
    }
}
