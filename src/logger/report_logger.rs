use std::path::Path;
use crate::i18n::{Locale, Message};
use crate::structs::batch_summary::BatchSummary;
use crate::structs::terminal_summary::TerminalSummary;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn render_scorecard(summary: &TerminalSummary, locale: Locale) -> String {
    format!(
        "\n📊 {}\n{}\n⭐  {}: {}/10\n🐛  {}: {}\n📈  {}: {}%\n{}",
        locale.text(Message::ScorecardTitle),
        RULE,
        locale.text(Message::Score),
        summary.score,
        locale.text(Message::Issues),
        summary.issues,
        locale.text(Message::Improvement),
        summary.improvement,
        RULE,
    )
}

pub fn print_scorecard(summary: &TerminalSummary, locale: Locale) {
    println!("{}", render_scorecard(summary, locale));
}

pub fn print_reports_saved(dir: &Path, locale: Locale) {
    println!("📁 {}: {}", locale.text(Message::ReportsSavedIn), dir.display());
}

pub fn render_consolidated_report(summary: &BatchSummary, locale: Locale) -> String {
    let finished_at = locale.format_datetime(&summary.finished_at);
    let mut lines = vec![
        String::new(),
        format!("📋 {}", locale.text(Message::ConsolidatedTitle)),
        RULE.to_string(),
        format!("📄 {}", locale.text(Message::FilesAnalyzed { count: summary.total() })),
        format!("✅ {}", locale.text(Message::Succeeded { count: summary.succeeded() })),
        format!("❌ {}", locale.text(Message::Failed { count: summary.failed() })),
    ];

    for failure in summary.failures() {
        if let Err(error) = &failure.result {
            lines.push(format!("   • {}: {}", failure.file_path.display(), locale.describe_error(error)));
        }
    }

    lines.push(format!("🕐 {}", locale.text(Message::FinishedAt { time: &finished_at })));
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn print_consolidated_report(summary: &BatchSummary, locale: Locale) {
    println!("{}", render_consolidated_report(summary, locale));

    for failure in summary.failures() {
        if let Err(error) = &failure.result {
            log::debug!("{} failed: {}", failure.file_path.display(), error.technical_details());
        }
    }
}
