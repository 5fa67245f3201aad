use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "rn-ai-optimize", version)]
#[clap(about = "Analyzes React Native source files and suggests improvements using AI", long_about = None)]
#[clap(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(flatten)]
    pub args: AnalyzeArgs,
}

#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeArgs {
    /// File(s) to analyze
    pub files: Vec<PathBuf>,

    /// OpenAI model to use (e.g.: gpt-4o, gpt-3.5-turbo)
    #[clap(long)]
    pub model: Option<String>,

    /// OpenAI API key (overrides the environment)
    #[clap(long = "apiKey")]
    pub api_key: Option<String>,

    /// Report language (e.g.: pt, en)
    #[clap(long)]
    pub language: Option<String>,

    /// Project type (e.g.: react-native, expo)
    #[clap(long = "projectType")]
    pub project_type: Option<String>,

    /// Project version (e.g.: 0.1.0)
    #[clap(long = "versionApp")]
    pub version_app: Option<String>,

    /// Analyze all files at once instead of one by one
    #[clap(long)]
    pub batch: bool,

    /// Also render a styled HTML report
    #[clap(long)]
    pub html: bool,
}
