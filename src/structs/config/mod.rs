pub mod api_key_config;
pub mod config;
pub mod default_paths;
