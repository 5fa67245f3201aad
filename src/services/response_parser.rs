use once_cell::sync::Lazy;
use regex::Regex;
use crate::structs::terminal_summary::TerminalSummary;

static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid fenced json pattern")
});

/// Pulls the `{score, issues, improvement}` object out of free-form model output.
///
/// Tries the whole text, then a fenced block, then a JSON object starting at
/// each `{` in order. Anything else yields `TerminalSummary::default()`.
pub fn extract_terminal_summary(response: &str) -> TerminalSummary {
    if let Some(summary) = parse_summary(response.trim()) {
        return summary;
    }

    if let Some(captures) = FENCED_JSON.captures(response) {
        if let Some(summary) = captures.get(1).and_then(|m| parse_summary(m.as_str())) {
            return summary;
        }
    }

    embedded_summary(response).unwrap_or_else(|| {
        log::debug!("Falling back to default summary, unparsable response: {}", response);
        TerminalSummary::default()
    })
}

/// First object embedded in prose. Nested objects and trailing text are fine.
fn embedded_summary(response: &str) -> Option<TerminalSummary> {
    response.match_indices('{').find_map(|(start, _)| {
        serde_json::Deserializer::from_str(&response[start..])
            .into_iter::<TerminalSummary>()
            .next()
            .and_then(Result::ok)
    })
}

fn parse_summary(candidate: &str) -> Option<TerminalSummary> {
    serde_json::from_str::<TerminalSummary>(candidate).ok()
}
