use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use clap::CommandFactory;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{sleep_duration_millis, CONFIG_FILE_NAME};
use crate::enums::batch_mode::BatchMode;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, OptimizeError, OptimizeResult};
use crate::i18n::{Locale, Message};
use crate::logger::report_logger;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::batch_analyzer::BatchAnalyzer;
use crate::services::file_analyzer::FileAnalyzer;
use crate::services::report_writer::ReportWriter;
use crate::services::source_validator::{is_expo_project, validate_source_path};
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::batch_summary::BatchSummary;
use crate::structs::cli::{AnalyzeArgs, Cli};
use crate::structs::config::config::Config;
use crate::structs::file_report::FileReport;
use crate::traits::ai_provider::AiProvider;
use crate::ui::prompter::Prompter;
use crate::ui::wizard::InteractiveWizard;

pub struct CommandRunner {
    config: Config,
    locale: Locale,
    root: PathBuf,
    provider: Option<Arc<dyn AiProvider>>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config, locale: Locale) -> Self {
        Self {
            config,
            locale,
            root: PathBuf::from("."),
            provider: None,
            start_time: None,
        }
    }

    /// Project directory: results, `init` output and wizard paths are relative to it.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Use this provider instead of building an OpenAI client from the API key.
    pub fn with_provider(mut self, provider: Arc<dyn AiProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub async fn run(&mut self, cli: Cli) -> OptimizeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match cli.command {
            Some(Commands::Init { force }) => self.init_command(force),
            Some(Commands::Analyze) => self.wizard_command(&cli.args).await,
            None => self.analyze_command(&cli.args).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, force: bool) -> OptimizeResult<()> {
        match ConfigManager::create_default_config(&self.root, force) {
            Ok(path) => {
                log::info!("✅ {}", self.locale.text(Message::ConfigCreated { path: &path.display().to_string() }));
                Ok(())
            }
            Err(OptimizeError::ConfigurationError { .. }) if !force => {
                let path = self.root.join(CONFIG_FILE_NAME);
                log::warn!("⚠️  {}", self.locale.text(Message::ConfigExists { path: &path.display().to_string() }));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn analyze_command(&self, args: &AnalyzeArgs) -> OptimizeResult<()> {
        if args.files.is_empty() {
            self.print_usage();
            return Ok(());
        }

        self.note_expo_project();
        let options = AnalysisOptions::from_config(&self.config).with_overrides(args);

        match args.files.as_slice() {
            [file] if !args.batch => self.run_single(file, options, args.api_key.as_deref()).await.map(|_| ()),
            files => {
                self.run_batch(files, BatchMode::from_flag(args.batch), options, args.api_key.as_deref())
                    .await
                    .map(|_| ())
            }
        }
    }

    async fn wizard_command(&self, args: &AnalyzeArgs) -> OptimizeResult<()> {
        // Fail before the first question when no key is available.
        if self.provider.is_none() {
            ConfigManager::resolve_api_key(args.api_key.as_deref(), &self.config.api_key)?;
        }

        let selection = {
            let stdin = io::stdin();
            let prompter = Prompter::new(stdin.lock(), io::stdout(), self.locale);
            InteractiveWizard::new(prompter, &self.config, self.root.clone()).run()?
        };

        self.note_expo_project();
        let options = selection.options.with_overrides(args);

        match selection.batch_mode {
            Some(mode) => self.run_batch(&selection.files, mode, options, args.api_key.as_deref()).await.map(|_| ()),
            None => match selection.files.first() {
                Some(file) => self.run_single(file, options, args.api_key.as_deref()).await.map(|_| ()),
                None => Ok(()),
            },
        }
    }

    /// Invalid paths are reported and end the run without an error. Anything
    /// else is handed back to the caller.
    pub async fn run_single(
        &self,
        file: &Path,
        options: AnalysisOptions,
        api_key: Option<&str>,
    ) -> OptimizeResult<Option<FileReport>> {
        if let Err(e) = validate_source_path(file) {
            ErrorHandler::handle_error(&e, self.locale);
            return Ok(None);
        }

        let analyzer = self.file_analyzer(options, api_key)?;
        match analyzer.analyze_file(file, false).await {
            Ok(report) => Ok(Some(report)),
            Err(e) if e.is_validation_error() => {
                ErrorHandler::handle_error(&e, self.locale);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn run_batch(
        &self,
        files: &[PathBuf],
        mode: BatchMode,
        options: AnalysisOptions,
        api_key: Option<&str>,
    ) -> OptimizeResult<BatchSummary> {
        let options = match mode {
            BatchMode::Parallel => options.without_progress(),
            BatchMode::Sequential => options,
        };

        let analyzer = Arc::new(self.file_analyzer(options, api_key)?);
        let delay = sleep_duration_millis(self.config.batch_delay_ms);
        let summary = BatchAnalyzer::new(analyzer, delay, self.locale).run(files, mode).await;

        report_logger::print_consolidated_report(&summary, self.locale);
        Ok(summary)
    }

    fn file_analyzer(&self, options: AnalysisOptions, api_key: Option<&str>) -> OptimizeResult<FileAnalyzer> {
        let provider = self.provider(&options.model, api_key)?;
        let writer = ReportWriter::new(self.root.join(&self.config.results_dir), self.locale)
            .with_html(options.html_report);

        Ok(FileAnalyzer::new(provider, options, writer, self.locale))
    }

    fn provider(&self, model: &str, api_key: Option<&str>) -> OptimizeResult<Arc<dyn AiProvider>> {
        if let Some(provider) = &self.provider {
            return Ok(Arc::clone(provider));
        }

        let key = ConfigManager::resolve_api_key(api_key, &self.config.api_key)?;
        let provider = OpenAIProvider::new(key).with_model(model.to_string());
        log::debug!("🤖 Using OpenAI model {}", provider.model());
        Ok(Arc::new(provider))
    }

    fn note_expo_project(&self) {
        if is_expo_project(&self.root) {
            log::info!("📱 {}", self.locale.text(Message::ExpoProjectDetected));
        }
    }

    fn print_usage(&self) {
        println!("{}", self.locale.text(Message::UsageInteractive));
        println!("{}\n", self.locale.text(Message::UsageDirect));

        let mut command = Cli::command();
        if command.print_help().is_err() {
            log::debug!("Failed to print help");
        }
        if io::stdout().flush().is_err() {
            log::debug!("Failed to flush stdout");
        }
    }
}
