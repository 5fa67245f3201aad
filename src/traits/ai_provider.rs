use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A hosted chat-completion endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends `prompt` as a single user message and returns the reply text.
    async fn chat(&self, prompt: String) -> Result<String, AiProviderError>;
}
