use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use rn_ai_optimize::enums::batch_mode::BatchMode;
use rn_ai_optimize::i18n::Locale;
use rn_ai_optimize::structs::analysis_options::AnalysisOptions;
use rn_ai_optimize::structs::config::config::Config;
use rn_ai_optimize::workers::command_runner::CommandRunner;
use super::fake_provider::ScriptedProvider;

const SUMMARY: &str = r#"{"score": 7, "issues": 3, "improvement": 15}"#;

fn sources(root: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = root.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("import React from 'react';\n// {}\n", name)).unwrap();
            path
        })
        .collect()
}

fn options(config: &Config) -> AnalysisOptions {
    AnalysisOptions::from_config(config).without_progress()
}

#[tokio::test(start_paused = true)]
async fn sequential_batch_waits_between_files() {
    let dir = TempDir::new().unwrap();
    let files = sources(dir.path(), &["src/screens/A.tsx", "src/screens/B.tsx", "src/screens/C.tsx"]);
    let provider = ScriptedProvider::new("review", SUMMARY).shared();
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(provider.clone());

    let started = tokio::time::Instant::now();
    let summary = runner.run_batch(&files, BatchMode::Sequential, options(&config), None).await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(4000));
    assert_eq!(summary.succeeded(), 3);
    assert_eq!(provider.calls(), 6);
    assert_eq!(provider.peak_in_flight(), 1);
}

#[tokio::test(start_paused = true)]
async fn configured_delay_is_honoured() {
    let dir = TempDir::new().unwrap();
    let files = sources(dir.path(), &["src/A.tsx", "src/B.tsx"]);
    let config = Config { batch_delay_ms: 500, ..Config::default() };
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(ScriptedProvider::new("review", SUMMARY).shared());

    let started = tokio::time::Instant::now();
    runner.run_batch(&files, BatchMode::Sequential, options(&config), None).await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn parallel_batch_runs_everything_at_once() {
    let dir = TempDir::new().unwrap();
    let files = sources(dir.path(), &["src/A.tsx", "src/B.tsx", "src/C.tsx", "src/D.tsx"]);
    let provider = ScriptedProvider::new("review", SUMMARY)
        .with_latency(Duration::from_millis(100))
        .shared();
    let config = Config::default();
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(provider.clone());

    let started = tokio::time::Instant::now();
    let summary = runner.run_batch(&files, BatchMode::Parallel, options(&config), None).await.unwrap();

    assert_eq!(summary.succeeded(), 4);
    assert_eq!(provider.peak_in_flight(), 4);
    // Two rounds of model calls, no inter-file delay.
    assert_eq!(started.elapsed(), Duration::from_millis(200));
}

#[tokio::test]
async fn one_failure_does_not_stop_the_batch() {
    let dir = TempDir::new().unwrap();
    let mut files = sources(dir.path(), &["src/Good.tsx", "src/Broken.tsx"]);
    files.insert(1, dir.path().join("src/Missing.tsx"));
    let config = Config { batch_delay_ms: 0, ..Config::default() };
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(ScriptedProvider::new("review", SUMMARY).failing_on("// src/Broken.tsx").shared());

    let summary = runner.run_batch(&files, BatchMode::Sequential, options(&config), None).await.unwrap();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed(), 2);
    let failed: Vec<&PathBuf> = summary.failures().map(|outcome| &outcome.file_path).collect();
    assert_eq!(failed, vec![&files[1], &files[2]]);
}

#[tokio::test]
async fn batch_reports_are_grouped_by_source_folder() {
    let dir = TempDir::new().unwrap();
    let files = sources(dir.path(), &["src/screens/Home.tsx", "src/components/Card.tsx"]);
    let config = Config { batch_delay_ms: 0, ..Config::default() };
    let runner = CommandRunner::new(config.clone(), Locale::En)
        .with_root(dir.path())
        .with_provider(ScriptedProvider::new("review", SUMMARY).shared());

    let summary = runner.run_batch(&files, BatchMode::Parallel, options(&config), None).await.unwrap();

    let results = dir.path().join("ai-results");
    let dirs: Vec<PathBuf> = summary
        .outcomes
        .iter()
        .map(|outcome| outcome.result.as_ref().unwrap().reports.markdown.parent().unwrap().to_path_buf())
        .collect();
    assert_eq!(dirs, vec![results.join("screens"), results.join("components")]);
}
