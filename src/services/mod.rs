pub mod ai_providers;
pub mod batch_analyzer;
pub mod file_analyzer;
pub mod file_discovery;
pub mod html_renderer;
pub mod report_writer;
pub mod response_parser;
pub mod source_validator;
