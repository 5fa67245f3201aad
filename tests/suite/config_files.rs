use std::fs;
use tempfile::TempDir;
use rn_ai_optimize::config::config_manager::ConfigManager;
use rn_ai_optimize::config::constants::CONFIG_FILE_NAME;
use rn_ai_optimize::structs::cli::AnalyzeArgs;
use rn_ai_optimize::structs::analysis_options::AnalysisOptions;
use rn_ai_optimize::structs::config::config::Config;

#[test]
fn init_output_loads_back_as_defaults() {
    let dir = TempDir::new().unwrap();
    let path = ConfigManager::create_default_config(dir.path(), false).unwrap();

    assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
    let loaded = ConfigManager::load_from_dirs(dir.path(), None).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn flags_beat_file_values_which_beat_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{ "model": "gpt-4", "language": "en", "projectType": "Expo" }"#,
    )
    .unwrap();
    let config = ConfigManager::load_from_dirs(dir.path(), None).unwrap();

    let args = AnalyzeArgs { model: Some("gpt-3.5-turbo".to_string()), ..AnalyzeArgs::default() };
    let options = AnalysisOptions::from_config(&config).with_overrides(&args);

    assert_eq!(options.model, "gpt-3.5-turbo");
    assert_eq!(options.language, "en");
    assert_eq!(options.project_type, "Expo");
    assert_eq!(options.version, "0.76.9");
}

#[test]
fn invalid_values_are_reported_but_still_loaded() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "language": "de" }"#).unwrap();

    let config = ConfigManager::load_from_dirs(dir.path(), None).unwrap();

    assert_eq!(config.language, "de");
    assert!(ConfigManager::validate_config(&config).is_err());
}
