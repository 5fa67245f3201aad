use serde::{Deserialize, Serialize};
use crate::enums::analysis_target::AnalysisTarget;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultPaths {
    #[serde(default = "ConfigHelper::default_screens_path")]
    pub screens: String,

    #[serde(default = "ConfigHelper::default_components_path")]
    pub components: String,

    #[serde(default = "ConfigHelper::default_services_path")]
    pub services: String,

    #[serde(default = "ConfigHelper::default_utils_path")]
    pub utils: String,
}

impl DefaultPaths {
    /// Directory scanned for a wizard category. `None` for targets that ask for a path.
    pub fn for_target(&self, target: AnalysisTarget) -> Option<&str> {
        match target {
            AnalysisTarget::Screens => Some(&self.screens),
            AnalysisTarget::Components => Some(&self.components),
            AnalysisTarget::Services => Some(&self.services),
            AnalysisTarget::Utils => Some(&self.utils),
            AnalysisTarget::CustomFile | AnalysisTarget::MultipleFiles => None,
        }
    }
}

impl Default for DefaultPaths {
    fn default() -> Self {
        Self {
            screens: ConfigHelper::default_screens_path(),
            components: ConfigHelper::default_components_path(),
            services: ConfigHelper::default_services_path(),
            utils: ConfigHelper::default_utils_path(),
        }
    }
}
