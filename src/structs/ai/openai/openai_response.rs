use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAIResponse {
    /// Text of the first choice, if the provider returned any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIErrorResponse {
    pub error: OpenAIErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenAIErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}
