use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use chrono::{DateTime, SecondsFormat, Utc};
use crate::errors::{OptimizeError, OptimizeResult, ResultExt};
use crate::i18n::Locale;
use crate::services::html_renderer;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::report_paths::ReportPaths;

/// ISO-8601 timestamp with `:` and `.` replaced by `-`, safe for file names.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Source file name without its extension.
pub fn report_file_stem(file_path: &Path) -> String {
    file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string())
}

pub fn report_file_name(file_path: &Path, timestamp: &DateTime<Utc>, extension: &str) -> String {
    format!("{}-{}.{}", report_file_stem(file_path), format_timestamp(timestamp), extension)
}

/// Writes analyses below a results directory.
///
/// Single-file runs write straight into the results directory. Batch runs nest
/// each report under a folder named after the source file's parent directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    results_dir: PathBuf,
    html: bool,
    locale: Locale,
}

impl ReportWriter {
    pub fn new(results_dir: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            results_dir: results_dir.into(),
            html: false,
            locale,
        }
    }

    pub fn with_html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn report_dir(&self, result: &AnalysisResult) -> PathBuf {
        if !result.batch_mode {
            return self.results_dir.clone();
        }

        match result.file_path.parent().and_then(|parent| parent.file_name()) {
            Some(folder) => self.results_dir.join(folder),
            None => self.results_dir.clone(),
        }
    }

    pub fn write(&self, result: &AnalysisResult) -> OptimizeResult<ReportPaths> {
        let report_dir = self.report_dir(result);
        let dir_display = report_dir.display().to_string();

        if !report_dir.exists() {
            log::debug!("📂 Creating reports directory {}", dir_display);
        }
        fs::create_dir_all(&report_dir).with_file_operation(&dir_display, "create reports directory")?;

        let markdown_name = report_file_name(&result.file_path, &result.timestamp, "md");
        let markdown = Self::write_new_file(&report_dir, &markdown_name, &result.analysis)?;
        log::debug!("📝 Wrote {}", markdown.display());

        let html = if self.html {
            let html_name = report_file_name(&result.file_path, &result.timestamp, "html");
            let document = html_renderer::render_document(result, &report_file_stem(&result.file_path), self.locale);
            let path = Self::write_new_file(&report_dir, &html_name, &document)?;
            log::debug!("🌐 Wrote {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(ReportPaths { markdown, html })
    }

    /// Creates `name` in `dir`, or `stem-2.ext`, `stem-3.ext`, ... when taken.
    fn write_new_file(dir: &Path, name: &str, content: &str) -> OptimizeResult<PathBuf> {
        let (stem, extension) = match name.rsplit_once('.') {
            Some((stem, extension)) => (stem.to_string(), format!(".{}", extension)),
            None => (name.to_string(), String::new()),
        };

        let mut attempt = 1;
        loop {
            let candidate = if attempt == 1 {
                dir.join(name)
            } else {
                dir.join(format!("{}-{}{}", stem, attempt, extension))
            };

            match OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(mut file) => {
                    file.write_all(content.as_bytes())
                        .with_file_operation(&candidate.display().to_string(), "write report")?;
                    return Ok(candidate);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => {
                    return Err(OptimizeError::file_error(
                        &candidate.display().to_string(),
                        "create report",
                        &e.to_string(),
                    ));
                }
            }
        }
    }
}
