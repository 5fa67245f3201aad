pub const REPORT_MARKER: &str = "Report to analyze:";

/// Asks the model to boil a finished review down to three numbers.
pub fn build_terminal_summary_prompt(report: &str) -> String {
    format!(
        r#"
You are a code quality and performance expert.
Analyze the following report and return ONLY a valid JSON object (no markdown, no code blocks, no explanations).

CRITICAL: Return ONLY the JSON object without any markdown formatting or code blocks.

Required format (exactly like this):
{{"score": X, "issues": Y, "improvement": Z}}

Where:
- score: overall score (0-10)
- issues: number of issues found
- improvement: average improvement potential as percentage (without % sign)

Do NOT include:
- markdown code blocks
- any explanations
- any text before or after the JSON
- any formatting except the raw JSON

{marker}
{report}
"#,
        marker = REPORT_MARKER,
        report = report,
    )
}
