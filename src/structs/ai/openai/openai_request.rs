use serde::Serialize;
use crate::structs::ai::openai::openai_message::OpenAIMessage;

#[derive(Serialize, Debug, Clone)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub temperature: f32,
}
