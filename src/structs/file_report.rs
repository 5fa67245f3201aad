use crate::structs::analysis_result::AnalysisResult;
use crate::structs::report_paths::ReportPaths;
use crate::structs::terminal_summary::TerminalSummary;

/// Everything produced for one analyzed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub result: AnalysisResult,
    pub summary: TerminalSummary,
    pub reports: ReportPaths,
}
