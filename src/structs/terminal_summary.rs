use serde::{Deserialize, Serialize};

/// Compact scorecard the model extracts from its own review.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalSummary {
    pub score: f64,
    pub issues: f64,
    pub improvement: f64,
}

impl Default for TerminalSummary {
    fn default() -> Self {
        Self {
            score: 5.0,
            issues: 0.0,
            improvement: 0.0,
        }
    }
}
