use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiKeyConfig {
    /// Name of the environment variable holding the key.
    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub env: String,

    #[serde(default = "ConfigHelper::default_api_key_description")]
    pub description: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            env: ConfigHelper::default_api_key_env(),
            description: ConfigHelper::default_api_key_description(),
        }
    }
}
