use std::path::PathBuf;
use chrono::{DateTime, Utc};

/// One finished model review, ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub file_path: PathBuf,
    pub analysis: String,
    pub timestamp: DateTime<Utc>,
    pub model: String,
    pub batch_mode: bool,
}
