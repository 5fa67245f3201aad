use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::api_key_config::ApiKeyConfig;
use crate::structs::config::default_paths::DefaultPaths;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    /// Language the model writes its review in (`pt` or `en`).
    #[serde(default = "ConfigHelper::default_language")]
    pub language: String,

    #[serde(default = "ConfigHelper::default_project_type")]
    pub project_type: String,

    #[serde(default = "ConfigHelper::default_version")]
    pub version: String,

    #[serde(default = "ConfigHelper::default_open_in_browser")]
    pub open_in_browser: bool,

    #[serde(default)]
    pub default_paths: DefaultPaths,

    #[serde(default)]
    pub api_key: ApiKeyConfig,

    #[serde(default = "ConfigHelper::default_results_dir")]
    pub results_dir: String,

    #[serde(default = "ConfigHelper::default_html_report")]
    pub html_report: bool,

    #[serde(default = "ConfigHelper::default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            language: ConfigHelper::default_language(),
            project_type: ConfigHelper::default_project_type(),
            version: ConfigHelper::default_version(),
            open_in_browser: ConfigHelper::default_open_in_browser(),
            default_paths: DefaultPaths::default(),
            api_key: ApiKeyConfig::default(),
            results_dir: ConfigHelper::default_results_dir(),
            html_report: ConfigHelper::default_html_report(),
            batch_delay_ms: ConfigHelper::default_batch_delay_ms(),
        }
    }
}
