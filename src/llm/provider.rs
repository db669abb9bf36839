use async_trait::async_trait;
use crate::error::Result;
use crate::llm::prompts::ProfileReviewRequest;
use crate::models::AIAnalysis;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn review_profile(&self, request: &ProfileReviewRequest) -> Result<AIAnalysis>;
    fn name(&self) -> &str;
}
