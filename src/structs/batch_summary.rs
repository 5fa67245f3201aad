use std::path::PathBuf;
use chrono::{DateTime, Utc};
use crate::enums::batch_mode::BatchMode;
use crate::errors::OptimizeResult;
use crate::structs::file_report::FileReport;

#[derive(Debug)]
pub struct FileOutcome {
    pub file_path: PathBuf,
    pub result: OptimizeResult<FileReport>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file outcomes of one batch, in input order.
#[derive(Debug)]
pub struct BatchSummary {
    pub mode: BatchMode,
    pub outcomes: Vec<FileOutcome>,
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }
}
