use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub markdown: PathBuf,
    pub html: Option<PathBuf>,
}
