use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use futures::future::join_all;
use crate::enums::batch_mode::BatchMode;
use crate::i18n::{Locale, Message};
use crate::services::file_analyzer::FileAnalyzer;
use crate::structs::batch_summary::{BatchSummary, FileOutcome};

/// Analyzes several files, either one after another with a pause in between
/// or all at once.
pub struct BatchAnalyzer {
    analyzer: Arc<FileAnalyzer>,
    delay: Duration,
    locale: Locale,
}

impl BatchAnalyzer {
    pub fn new(analyzer: Arc<FileAnalyzer>, delay: Duration, locale: Locale) -> Self {
        Self { analyzer, delay, locale }
    }

    /// Outcomes come back in input order whatever the mode. A failing file is
    /// recorded and never stops the others.
    pub async fn run(&self, files: &[PathBuf], mode: BatchMode) -> BatchSummary {
        log::info!("🔍 {}", self.locale.text(Message::AnalyzingFiles { count: files.len() }));

        let outcomes = match mode {
            BatchMode::Parallel => {
                log::info!("{}", self.locale.text(Message::ParallelMode));
                self.run_parallel(files).await
            }
            BatchMode::Sequential => {
                log::info!("{}", self.locale.text(Message::SequentialMode));
                self.run_sequential(files).await
            }
        };

        BatchSummary {
            mode,
            outcomes,
            finished_at: Utc::now(),
        }
    }

    async fn run_sequential(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        let total = files.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, file_path) in files.iter().enumerate() {
            let display = file_path.display().to_string();
            log::info!("\n{}", self.locale.text(Message::FileProgress { index: index + 1, total, file: &display }));

            outcomes.push(self.analyze(file_path).await);

            if index + 1 < total {
                log::info!("{}", self.locale.text(Message::Waiting { seconds: self.delay.as_secs_f64() }));
                tokio::time::sleep(self.delay).await;
            }
        }

        outcomes
    }

    async fn run_parallel(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        let tasks = files.iter().map(|file_path| self.analyze(file_path));
        join_all(tasks).await
    }

    async fn analyze(&self, file_path: &Path) -> FileOutcome {
        let result = self.analyzer.analyze_file(file_path, true).await;

        if let Err(e) = &result {
            log::error!("❌ {}: {}", file_path.display(), self.locale.describe_error(e));
        }

        FileOutcome {
            file_path: file_path.to_path_buf(),
            result,
        }
    }
}
