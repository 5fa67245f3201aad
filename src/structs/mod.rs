pub mod ai;
pub mod analysis_options;
pub mod analysis_result;
pub mod batch_summary;
pub mod cli;
pub mod config;
pub mod file_report;
pub mod report_paths;
pub mod terminal_summary;
