use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use rn_ai_optimize::enums::ai_provider_error::AiProviderError;
use rn_ai_optimize::prompts::terminal_summary_prompt::REPORT_MARKER;
use rn_ai_optimize::traits::ai_provider::AiProvider;

/// Answers review prompts with a fixed Markdown review and summary prompts
/// with a fixed JSON scorecard. Records call counts and peak concurrency.
pub struct ScriptedProvider {
    pub review: String,
    pub summary: String,
    pub latency: Duration,
    pub fail_when_prompt_contains: Option<String>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(review: &str, summary: &str) -> Self {
        Self {
            review: review.to_string(),
            summary: summary.to_string(),
            latency: Duration::ZERO,
            fail_when_prompt_contains: None,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing_on(mut self, needle: &str) -> Self {
        self.fail_when_prompt_contains = Some(needle.to_string());
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn chat(&self, prompt: String) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(needle) = &self.fail_when_prompt_contains {
            if prompt.contains(needle.as_str()) {
                return Err(AiProviderError::ApiError("HTTP 500: upstream failure".to_string()));
            }
        }

        if prompt.contains(REPORT_MARKER) {
            Ok(self.summary.clone())
        } else {
            Ok(self.review.clone())
        }
    }
}
