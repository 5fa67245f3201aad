use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_FILE_NAME, DOTENV_FILE_NAME, SUPPORTED_LANGUAGES};
use crate::errors::{OptimizeError, OptimizeResult, ResultExt};
use crate::structs::config::api_key_config::ApiKeyConfig;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    /// `.rn-ai-optimize.json` from the working directory, then from the home
    /// directory, then the built-in defaults.
    pub fn load() -> OptimizeResult<Config> {
        let cwd = std::env::current_dir().with_operation("resolving the working directory")?;
        let home = dirs::home_dir();
        Self::load_from_dirs(&cwd, home.as_deref())
    }

    /// Exports the variables of `<dir>/.env` that are not already set.
    ///
    /// A missing or unreadable file is skipped; returns the loaded path.
    pub fn load_dotenv(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(DOTENV_FILE_NAME);
        match dotenvy::from_path(&path) {
            Ok(()) => {
                log::debug!("🔑 Loaded environment from: {}", path.display());
                Some(path)
            }
            Err(e) if e.not_found() => None,
            Err(e) => {
                log::debug!("Skipping {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn load_from_dirs(cwd: &Path, home: Option<&Path>) -> OptimizeResult<Config> {
        let candidates = std::iter::once(cwd.join(CONFIG_FILE_NAME))
            .chain(home.map(|dir| dir.join(CONFIG_FILE_NAME)));

        for path in candidates {
            if path.is_file() {
                log::debug!("📋 Loading config from: {}", path.display());
                return Self::load_from(&path);
            }
        }

        log::debug!("📋 No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> OptimizeResult<Config> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).with_file_operation(&display, "read configuration")?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| OptimizeError::config_file_error(&display, &e.to_string()))?;

        if let Err(problems) = Self::validate_config(&config) {
            for problem in problems {
                log::warn!("⚠️  {}: {}", display, problem);
            }
        }

        Ok(config)
    }

    /// Writes the default configuration as pretty JSON into `dir`.
    ///
    /// An existing file is left alone unless `force` is set.
    pub fn create_default_config(dir: &Path, force: bool) -> OptimizeResult<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        let display = path.display().to_string();

        if path.exists() && !force {
            return Err(OptimizeError::config_error(
                &format!("Configuration file already exists: {}", display),
                None,
                Some("Use --force to overwrite it"),
            ));
        }

        let content = serde_json::to_string_pretty(&Config::default())?;
        fs::write(&path, content + "\n").with_file_operation(&display, "write configuration")?;
        Ok(path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.model.trim().is_empty() {
            errors.push("model must not be empty".to_string());
        }

        if config.api_key.env.trim().is_empty() {
            errors.push("apiKey.env must name an environment variable".to_string());
        }

        if !SUPPORTED_LANGUAGES.contains(&config.language.as_str()) {
            errors.push(format!(
                "language '{}' is not supported (expected one of: {})",
                config.language,
                SUPPORTED_LANGUAGES.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `--apiKey` wins over the configured environment variable.
    pub fn resolve_api_key(cli_key: Option<&str>, api_key: &ApiKeyConfig) -> OptimizeResult<String> {
        Self::resolve_api_key_with(cli_key, api_key, |name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(cli_key: Option<&str>, api_key: &ApiKeyConfig, lookup: F) -> OptimizeResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = cli_key.map(str::trim).filter(|key| !key.is_empty()) {
            return Ok(key.to_string());
        }

        lookup(&api_key.env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| OptimizeError::missing_api_key(&api_key.env, &api_key.description))
    }
}
