use crate::structs::cli::AnalyzeArgs;
use crate::structs::config::config::Config;

/// Settings shared by every file of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub model: String,
    pub language: String,
    pub project_type: String,
    pub version: String,
    pub html_report: bool,
    pub open_in_browser: bool,
    /// Show the spinner while waiting for the model.
    pub show_progress: bool,
}

impl AnalysisOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            language: config.language.clone(),
            project_type: config.project_type.clone(),
            version: config.version.clone(),
            html_report: config.html_report,
            open_in_browser: config.open_in_browser,
            show_progress: true,
        }
    }

    /// Command-line flags win over the configuration file.
    pub fn with_overrides(mut self, args: &AnalyzeArgs) -> Self {
        if let Some(model) = &args.model {
            self.model = model.clone();
        }
        if let Some(language) = &args.language {
            self.language = language.clone();
        }
        if let Some(project_type) = &args.project_type {
            self.project_type = project_type.clone();
        }
        if let Some(version) = &args.version_app {
            self.version = version.clone();
        }
        if args.html {
            self.html_report = true;
        }
        self
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }
}
