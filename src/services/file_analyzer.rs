use std::fs;
use std::path::Path;
use std::sync::Arc;
use chrono::Utc;
use crate::errors::{OptimizeResult, ResultExt};
use crate::i18n::{Locale, Message};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_logger;
use crate::prompts::analysis_prompt::build_analysis_prompt;
use crate::prompts::prompt_context::PromptContext;
use crate::prompts::terminal_summary_prompt::build_terminal_summary_prompt;
use crate::services::report_writer::ReportWriter;
use crate::services::response_parser::extract_terminal_summary;
use crate::services::source_validator::{references_ui_framework, validate_source_path};
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::file_report::FileReport;
use crate::traits::ai_provider::AiProvider;

/// Runs the full review pipeline for one source file.
pub struct FileAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
    options: AnalysisOptions,
    report_writer: ReportWriter,
    locale: Locale,
}

impl FileAnalyzer {
    pub fn new(
        ai_provider: Arc<dyn AiProvider>,
        options: AnalysisOptions,
        report_writer: ReportWriter,
        locale: Locale,
    ) -> Self {
        Self {
            ai_provider,
            options,
            report_writer,
            locale,
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Validation happens before the first model call, so a bad path never
    /// costs a request.
    pub async fn analyze_file(&self, path: &Path, batch_mode: bool) -> OptimizeResult<FileReport> {
        validate_source_path(path)?;

        let display = path.display().to_string();
        let code = fs::read_to_string(path).with_file_operation(&display, "read source file")?;

        if !references_ui_framework(&code) {
            log::warn!("⚠️  {}", self.locale.text(Message::NotReactFile));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| display.clone());

        let context = PromptContext {
            code: &code,
            language: &self.options.language,
            project_type: &self.options.project_type,
            version: &self.options.version,
            model: &self.options.model,
            file_name: &file_name,
        };

        let analysis = self
            .ask(
                build_analysis_prompt(&context),
                self.locale.text(Message::Analyzing { file: &display }),
                self.locale.text(Message::AnalysisComplete),
            )
            .await?;

        let summary_text = self
            .ask(
                build_terminal_summary_prompt(&analysis),
                self.locale.text(Message::Summarizing),
                self.locale.text(Message::SummaryComplete),
            )
            .await?;
        let summary = extract_terminal_summary(&summary_text);

        report_logger::print_scorecard(&summary, self.locale);

        let result = AnalysisResult {
            file_path: path.to_path_buf(),
            analysis,
            timestamp: Utc::now(),
            model: self.options.model.clone(),
            batch_mode,
        };

        let reports = self.report_writer.write(&result)?;
        report_logger::print_reports_saved(&self.report_writer.report_dir(&result), self.locale);

        if let Some(html) = &reports.html {
            if self.options.open_in_browser && !batch_mode {
                if let Err(e) = webbrowser::open(&html.display().to_string()) {
                    log::warn!("Could not open {} in the browser: {}", html.display(), e);
                }
            }
        }

        Ok(FileReport { result, summary, reports })
    }

    async fn ask(&self, prompt: String, progress: String, done: String) -> OptimizeResult<String> {
        if !self.options.show_progress {
            return Ok(self.ai_provider.chat(prompt).await?);
        }

        Ok(AnimatedLogger::track(progress, &done, self.ai_provider.chat(prompt)).await?)
    }
}
