use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use crate::config::constants::{LANGUAGE_CHOICES, MODEL_CHOICES};
use crate::enums::analysis_target::AnalysisTarget;
use crate::enums::batch_mode::BatchMode;
use crate::errors::{OptimizeError, OptimizeResult};
use crate::i18n::Message;
use crate::services::file_discovery::FileDiscovery;
use crate::services::source_validator::validate_source_path;
use crate::structs::analysis_options::AnalysisOptions;
use crate::structs::config::config::Config;
use crate::ui::prompter::Prompter;

const MULTIPLE_FILES_DEFAULT_DIR: &str = "src";

/// What the wizard collected: files to analyze and the settings to use.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSelection {
    pub files: Vec<PathBuf>,
    /// Set when several files were chosen.
    pub batch_mode: Option<BatchMode>,
    pub options: AnalysisOptions,
}

pub struct InteractiveWizard<'a, R: BufRead, W: Write> {
    prompter: Prompter<R, W>,
    config: &'a Config,
    root: PathBuf,
}

impl<'a, R: BufRead, W: Write> InteractiveWizard<'a, R, W> {
    /// `root` is the project directory the configured paths are relative to.
    pub fn new(prompter: Prompter<R, W>, config: &'a Config, root: impl Into<PathBuf>) -> Self {
        Self {
            prompter,
            config,
            root: root.into(),
        }
    }

    pub fn run(mut self) -> OptimizeResult<WizardSelection> {
        let locale = self.prompter.locale();
        let config = self.config;
        self.prompter.say(&format!("\n{}", locale.text(Message::WizardTitle)))?;

        let labels: Vec<String> = AnalysisTarget::ALL.iter().map(|target| target.label(locale)).collect();
        let target = AnalysisTarget::ALL[self.prompter.select(&locale.text(Message::ChooseTarget), &labels)?];

        let (files, batch_mode) = match target {
            AnalysisTarget::CustomFile => (vec![self.ask_for_path()?], None),
            AnalysisTarget::MultipleFiles => {
                let files = self.choose_many()?;
                let parallel = self.prompter.confirm(&locale.text(Message::RunInParallel), false)?;
                (files, Some(BatchMode::from_flag(parallel)))
            }
            category => {
                let dir = config.default_paths.for_target(category).unwrap_or(MULTIPLE_FILES_DEFAULT_DIR);
                (vec![self.choose_one(dir)?], None)
            }
        };

        let options = self.choose_options()?;

        for file in &files {
            self.prompter.say(&locale.text(Message::SelectedFile { file: &file.display().to_string() }))?;
        }
        self.prompter.say(&locale.text(Message::SelectedModel { model: &options.model }))?;
        self.prompter.say(&locale.text(Message::SelectedLanguage { language: &options.language }))?;
        self.prompter.say(&locale.text(Message::SelectedProject {
            project: &options.project_type,
            version: &options.version,
        }))?;
        self.prompter.say(&locale.text(Message::StartingAnalysis))?;

        Ok(WizardSelection { files, batch_mode, options })
    }

    fn ask_for_path(&mut self) -> OptimizeResult<PathBuf> {
        let locale = self.prompter.locale();
        let root = self.root.clone();

        let answer = self.prompter.input(&locale.text(Message::EnterPath), None, |value| {
            if value.is_empty() {
                return Err(locale.text(Message::EmptyPath));
            }
            validate_source_path(&root.join(value)).map_err(|e| locale.describe_error(&e))
        })?;

        Ok(self.root.join(answer))
    }

    fn choose_one(&mut self, dir: &str) -> OptimizeResult<PathBuf> {
        let locale = self.prompter.locale();
        let files = self.discover(dir)?;
        let labels = Self::labels(&self.root.join(dir), &files);

        let index = self.prompter.select(&locale.text(Message::ChooseFile { dir }), &labels)?;
        Ok(files[index].clone())
    }

    fn choose_many(&mut self) -> OptimizeResult<Vec<PathBuf>> {
        let locale = self.prompter.locale();
        let dir = self.prompter.input(
            &locale.text(Message::EnterPath),
            Some(MULTIPLE_FILES_DEFAULT_DIR),
            |value| if value.is_empty() { Err(locale.text(Message::EmptyPath)) } else { Ok(()) },
        )?;

        let files = self.discover(&dir)?;
        let labels = Self::labels(&self.root.join(&dir), &files);
        let chosen = self.prompter.multi_select(&locale.text(Message::ChooseFiles { dir: &dir }), &labels)?;

        Ok(chosen.into_iter().map(|index| files[index].clone()).collect())
    }

    fn choose_options(&mut self) -> OptimizeResult<AnalysisOptions> {
        let locale = self.prompter.locale();
        let mut options = AnalysisOptions::from_config(self.config);

        let keep_defaults = self.prompter.confirm(
            &locale.text(Message::UseDefaults {
                model: &options.model,
                language: &options.language,
                project: &options.project_type,
            }),
            true,
        )?;
        if keep_defaults {
            return Ok(options);
        }

        let models: Vec<String> = MODEL_CHOICES.iter().map(|(label, _)| label.to_string()).collect();
        options.model = MODEL_CHOICES[self.prompter.select(&locale.text(Message::ChooseModel), &models)?].1.to_string();

        let languages: Vec<String> = LANGUAGE_CHOICES.iter().map(|(label, _)| label.to_string()).collect();
        options.language =
            LANGUAGE_CHOICES[self.prompter.select(&locale.text(Message::ChooseLanguage), &languages)?].1.to_string();

        options.project_type = self.prompter.input(
            &locale.text(Message::ProjectType),
            Some(self.config.project_type.as_str()),
            |_| Ok(()),
        )?;
        options.version = self.prompter.input(
            &locale.text(Message::ProjectVersion),
            Some(self.config.version.as_str()),
            |_| Ok(()),
        )?;

        Ok(options)
    }

    fn discover(&self, dir: &str) -> OptimizeResult<Vec<PathBuf>> {
        let files = FileDiscovery::new(self.root.join(dir)).discover();
        if files.is_empty() {
            let locale = self.prompter.locale();
            return Err(OptimizeError::input_error(
                dir,
                &locale.text(Message::NoFilesFound { dir }),
                "Check defaultPaths in .rn-ai-optimize.json",
            ));
        }
        Ok(files)
    }

    fn labels(base: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|file| file.strip_prefix(base).unwrap_or(file).display().to_string())
            .collect()
    }
}
