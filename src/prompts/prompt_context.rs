/// Values interpolated into the review prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext<'a> {
    pub code: &'a str,
    pub language: &'a str,
    pub project_type: &'a str,
    pub version: &'a str,
    pub model: &'a str,
    pub file_name: &'a str,
}

impl PromptContext<'_> {
    /// Locale tag the model should answer in.
    pub fn response_locale(&self) -> &'static str {
        if self.language == "pt" {
            "pt-BR"
        } else {
            "en-US"
        }
    }
}
