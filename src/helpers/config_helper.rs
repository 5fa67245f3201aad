use crate::config::constants::{DEFAULT_BATCH_DELAY_MILLIS, DEFAULT_RESULTS_DIR, OPENAI_API_KEY_ENV};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        "gpt-4o".to_string()
    }

    pub fn default_language() -> String {
        "pt".to_string()
    }

    pub fn default_project_type() -> String {
        "React Native".to_string()
    }

    pub fn default_version() -> String {
        "0.76.9".to_string()
    }

    pub fn default_open_in_browser() -> bool {
        true
    }

    pub fn default_screens_path() -> String {
        "src/screens".to_string()
    }

    pub fn default_components_path() -> String {
        "src/components".to_string()
    }

    pub fn default_services_path() -> String {
        "src/services".to_string()
    }

    pub fn default_utils_path() -> String {
        "src/utils".to_string()
    }

    pub fn default_api_key_env() -> String {
        OPENAI_API_KEY_ENV.to_string()
    }

    pub fn default_api_key_description() -> String {
        "Put OPENAI_API_KEY in the .env file or export it in your shell".to_string()
    }

    pub fn default_results_dir() -> String {
        DEFAULT_RESULTS_DIR.to_string()
    }

    pub fn default_html_report() -> bool {
        false
    }

    pub fn default_batch_delay_ms() -> u64 {
        DEFAULT_BATCH_DELAY_MILLIS
    }
}
