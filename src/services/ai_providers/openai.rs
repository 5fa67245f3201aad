use async_trait::async_trait;
use reqwest::Client;

use crate::config::constants::{CHAT_TEMPERATURE, EMPTY_RESPONSE_FALLBACK, OPENAI_BASE_URL};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::{OpenAIErrorResponse, OpenAIResponse};
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            client: Client::new(),
            model: "gpt-4o".to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn get_request(&self, prompt: String) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: vec![OpenAIMessage::user(prompt)],
            temperature: CHAT_TEMPERATURE,
        }
    }

    async fn make_request(&self, url: String, request_body: OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    fn error_message(body: &str) -> String {
        match serde_json::from_str::<OpenAIErrorResponse>(body) {
            Ok(parsed) => match parsed.error.error_type {
                Some(error_type) => format!("{}: {}", error_type, parsed.error.message),
                None => parsed.error.message,
            },
            Err(_) => body.to_string(),
        }
    }

    pub async fn get_non_streaming_response(&self, prompt: String) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(prompt);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = Self::error_message(&error_text);

            log::debug!("❌ OpenAI API Error Response: {}", error_text);

            return Err(match status.as_u16() {
                401 => AiProviderError::AuthenticationError(message),
                429 => AiProviderError::RateLimited(message),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, message)),
            });
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Ok(body
            .first_content()
            .unwrap_or(EMPTY_RESPONSE_FALLBACK)
            .to_string())
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    async fn chat(&self, prompt: String) -> Result<String, AiProviderError> {
        self.get_non_streaming_response(prompt).await
    }
}
