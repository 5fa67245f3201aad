use std::fs;
use std::path::Path;
use std::sync::Arc;
use clap::Parser;
use tempfile::TempDir;
use tokio_test::assert_ok;
use rn_ai_optimize::i18n::Locale;
use rn_ai_optimize::structs::analysis_options::AnalysisOptions;
use rn_ai_optimize::structs::cli::Cli;
use rn_ai_optimize::structs::config::config::Config;
use rn_ai_optimize::workers::command_runner::CommandRunner;
use super::fake_provider::ScriptedProvider;

const REVIEW: &str = "## Overview\nButton renders a pressable.\n\n**Issue**: inline styles\n";
const SUMMARY: &str = r#"{"score": 8, "issues": 2, "improvement": 30}"#;

fn write_source(root: &Path, relative: &str, code: &str) -> std::path::PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, code).unwrap();
    path
}

fn options(config: &Config) -> AnalysisOptions {
    AnalysisOptions::from_config(config).without_progress()
}

#[tokio::test]
async fn single_file_review_is_saved_verbatim() {
    let dir = TempDir::new().unwrap();
    let source = write_source(
        dir.path(),
        "src/components/Button.tsx",
        "import React from 'react';\nexport const Button = () => <Pressable />;\n",
    );
    let provider = ScriptedProvider::new(REVIEW, SUMMARY).shared();
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(provider.clone());

    let report = runner.run_single(&source, options(&config), None).await.unwrap().unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!((report.summary.score, report.summary.issues, report.summary.improvement), (8.0, 2.0, 30.0));

    let markdown = &report.reports.markdown;
    assert_eq!(markdown.parent().unwrap(), dir.path().join("ai-results"));
    let name = markdown.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("Button-"), "unexpected name {}", name);
    assert!(name.ends_with(".md"));
    assert_eq!(fs::read_to_string(markdown).unwrap(), REVIEW);
    assert!(report.reports.html.is_none());
}

#[tokio::test]
async fn html_flag_adds_a_rendered_report() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "src/App.jsx", "import React from 'react';");
    let config = Config { open_in_browser: false, ..Config::default() };
    let runner = CommandRunner::new(config.clone(), Locale::Pt)
        .with_root(dir.path())
        .with_provider(ScriptedProvider::new(REVIEW, SUMMARY).shared());

    let mut options = options(&config);
    options.html_report = true;
    let report = runner.run_single(&source, options, None).await.unwrap().unwrap();

    let html = fs::read_to_string(report.reports.html.unwrap()).unwrap();
    assert!(html.contains("<html lang=\"pt-BR\">"));
    assert!(html.contains("<h2>Overview</h2>"));
    assert!(html.contains("<strong>Issue</strong>"));
}

#[tokio::test]
async fn missing_file_never_reaches_the_model() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::new(REVIEW, SUMMARY).shared();
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(provider.clone());

    let outcome = assert_ok!(runner.run_single(&dir.path().join("Nope.tsx"), options(&config), None).await);

    assert!(outcome.is_none());
    assert_eq!(provider.calls(), 0);
    assert!(!dir.path().join("ai-results").exists());
}

#[tokio::test]
async fn unsupported_extension_never_reaches_the_model() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "styles.css", ".a { color: red; }");
    let provider = ScriptedProvider::new(REVIEW, SUMMARY).shared();
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(provider.clone());

    let outcome = assert_ok!(runner.run_single(&source, options(&config), None).await);

    assert!(outcome.is_none());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn unparsable_scorecard_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "src/utils/format.ts", "export const f = () => 1;");
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(ScriptedProvider::new(REVIEW, "Sorry, no JSON today.").shared());

    let report = runner.run_single(&source, options(&config), None).await.unwrap().unwrap();

    assert_eq!((report.summary.score, report.summary.issues, report.summary.improvement), (5.0, 0.0, 0.0));
}

#[tokio::test]
async fn upstream_failure_is_returned_to_the_caller() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "src/App.tsx", "import React from 'react';");
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(ScriptedProvider::new(REVIEW, SUMMARY).failing_on("App.tsx").shared());

    assert!(runner.run_single(&source, options(&config), None).await.is_err());
    assert!(!dir.path().join("ai-results").exists());
}

#[tokio::test]
async fn root_command_with_one_file_runs_single_mode() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "src/screens/Home.tsx", "import React from 'react';");
    let provider = ScriptedProvider::new(REVIEW, SUMMARY).shared();
    let provider_handle: Arc<ScriptedProvider> = Arc::clone(&provider);
    let mut runner = CommandRunner::new(Config::default(), Locale::En)
        .with_root(dir.path())
        .with_provider(provider);

    let cli = Cli::try_parse_from([std::ffi::OsStr::new("rn-ai-optimize"), source.as_os_str()]).unwrap();
    runner.run(cli).await.unwrap();

    assert_eq!(provider_handle.calls(), 2);
    let written: Vec<_> = fs::read_dir(dir.path().join("ai-results")).unwrap().flatten().collect();
    assert_eq!(written.len(), 1);
}
