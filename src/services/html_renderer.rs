//! Markdown-to-HTML conversion for the styled report.
//!
//! This is not a Markdown parser. It is an ordered list of small rewrite rules
//! tuned to the review format the model is asked for. Code blocks are rendered
//! first and swapped for placeholders so the text rules never touch code.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use crate::config::constants::TOOL_NAME;
use crate::i18n::{Locale, Message};
use crate::structs::analysis_result::AnalysisResult;

const DEFAULT_CODE_LANGUAGE: &str = "javascript";
const PLACEHOLDER_MARK: char = '\u{1A}';

static CODE_COMPARISON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)### 🔴 Before\s*\n```(\w+)?\n(.*?)\n```\s*\n### ✅ After\s*\n```(\w+)?\n(.*?)\n```")
        .expect("valid comparison pattern")
});

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(\w+)?\n(.*?)\n```").expect("valid fenced code pattern")
});

static HEADING_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").expect("valid h3 pattern"));
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").expect("valid h2 pattern"));
static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").expect("valid h1 pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new("\u{1A}CODE(\\d+)\u{1A}").expect("valid placeholder pattern"));

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn code_language(language: Option<&str>) -> &str {
    language.filter(|lang| !lang.is_empty()).unwrap_or(DEFAULT_CODE_LANGUAGE)
}

pub fn render_code_comparison(
    before_language: Option<&str>,
    before: &str,
    after_language: Option<&str>,
    after: &str,
    locale: Locale,
) -> String {
    format!(
        concat!(
            "<div class=\"code-comparison\"><div class=\"before-after-container\">",
            "<div class=\"code-block before\"><div class=\"code-header\">",
            "<span class=\"status-icon\">🔴</span><span class=\"status-text\">{before_label}</span></div>",
            "<div class=\"code-content\"><pre><code class=\"language-{before_lang}\">{before}</code></pre></div></div>",
            "<div class=\"code-block after\"><div class=\"code-header\">",
            "<span class=\"status-icon\">✅</span><span class=\"status-text\">{after_label}</span></div>",
            "<div class=\"code-content\"><pre><code class=\"language-{after_lang}\">{after}</code></pre></div></div>",
            "</div></div>"
        ),
        before_label = locale.text(Message::ReportBefore),
        before_lang = code_language(before_language),
        before = escape_html(before.trim()),
        after_label = locale.text(Message::ReportAfter),
        after_lang = code_language(after_language),
        after = escape_html(after.trim()),
    )
}

pub fn render_code_block(language: Option<&str>, code: &str, locale: Locale) -> String {
    let tag = match language.filter(|lang| !lang.is_empty()) {
        Some(lang) => lang.to_string(),
        None => locale.text(Message::ReportCode),
    };

    format!(
        concat!(
            "<div class=\"code-block single\"><div class=\"code-header\">",
            "<span class=\"language-tag\">{tag}</span></div>",
            "<div class=\"code-content\"><pre><code class=\"language-{lang}\">{code}</code></pre></div></div>"
        ),
        tag = escape_html(&tag),
        lang = code_language(language),
        code = escape_html(code.trim()),
    )
}

/// Headings, deepest level first so `###` is never read as `#`.
pub fn render_headings(text: &str) -> String {
    let text = HEADING_3.replace_all(text, "<h3>$1</h3>");
    let text = HEADING_2.replace_all(&text, "<h2>$1</h2>");
    HEADING_1.replace_all(&text, "<h1>$1</h1>").into_owned()
}

pub fn render_bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Each run of consecutive `- item` lines becomes one `<ul>` on a single line.
pub fn render_lists(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in text.lines() {
        match line.strip_prefix("- ") {
            Some(item) => {
                let rendered = format!("<li>{}</li>", item);
                if in_list {
                    if let Some(last) = lines.last_mut() {
                        last.push_str(&rendered);
                    }
                } else {
                    lines.push(format!("<ul>{}", rendered));
                }
                in_list = true;
            }
            None => {
                if in_list {
                    if let Some(last) = lines.last_mut() {
                        last.push_str("</ul>");
                    }
                    in_list = false;
                }
                lines.push(line.to_string());
            }
        }
    }

    if in_list {
        if let Some(last) = lines.last_mut() {
            last.push_str("</ul>");
        }
    }

    lines.join("\n")
}

pub fn render_paragraphs(text: &str) -> String {
    let text = text.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{}</p>", text)
}

fn placeholder(index: usize) -> String {
    format!("{mark}CODE{index}{mark}", mark = PLACEHOLDER_MARK, index = index)
}

fn shield_code(markdown: &str, locale: Locale, blocks: &mut Vec<String>) -> String {
    let text = CODE_COMPARISON.replace_all(markdown, |caps: &Captures| {
        blocks.push(render_code_comparison(
            caps.get(1).map(|m| m.as_str()),
            &caps[2],
            caps.get(3).map(|m| m.as_str()),
            &caps[4],
            locale,
        ));
        placeholder(blocks.len() - 1)
    });

    FENCED_CODE
        .replace_all(&text, |caps: &Captures| {
            blocks.push(render_code_block(caps.get(1).map(|m| m.as_str()), &caps[2], locale));
            placeholder(blocks.len() - 1)
        })
        .into_owned()
}

fn restore_code(text: &str, blocks: &[String]) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| blocks.get(index))
                .cloned()
                .unwrap_or_default()
        })
        .into_owned()
}

/// Runs every rule in order over the model's review.
pub fn render_markdown(markdown: &str, locale: Locale) -> String {
    let mut blocks = Vec::new();
    let text = shield_code(markdown, locale, &mut blocks);
    let text = render_headings(&text);
    let text = render_bold(&text);
    let text = render_lists(&text);
    let text = render_paragraphs(&text);
    restore_code(&text, &blocks)
}

/// Full standalone HTML page for one analysis.
pub fn render_document(result: &AnalysisResult, file_name: &str, locale: Locale) -> String {
    let title = locale.text(Message::ReportTitle);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {file_name}</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🚀 {title}</h1>
            <div class="meta">
                <div class="meta-item"><span><strong>📄 {file_label}:</strong></span><span>{file_path}</span></div>
                <div class="meta-item"><span><strong>🤖 {model_label}:</strong></span><span>{model}</span></div>
                <div class="meta-item"><span><strong>📅 {date_label}:</strong></span><span>{date}</span></div>
                <div class="meta-item"><span><strong>🛠️ {tool_label}:</strong></span><span>{tool}</span></div>
            </div>
        </div>
        <div class="content">
            {body}
        </div>
        <div class="footer">
            <p>{footer} <strong>{tool}</strong></p>
        </div>
    </div>
</body>
</html>
"#,
        lang = locale.html_lang(),
        title = title,
        file_name = escape_html(file_name),
        style = REPORT_STYLE,
        file_label = locale.text(Message::ReportFile),
        file_path = escape_html(&result.file_path.display().to_string()),
        model_label = locale.text(Message::ReportModel),
        model = escape_html(&result.model),
        date_label = locale.text(Message::ReportDate),
        date = locale.format_datetime(&result.timestamp),
        tool_label = locale.text(Message::ReportTool),
        tool = TOOL_NAME,
        body = render_markdown(&result.analysis, locale),
        footer = locale.text(Message::ReportFooter),
    )
}

const REPORT_STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }
        .container { max-width: 1200px; margin: 0 auto; background: white; border-radius: 12px; box-shadow: 0 20px 40px rgba(0,0,0,0.1); overflow: hidden; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 40px; text-align: center; }
        .header h1 { font-size: 2.5rem; margin-bottom: 10px; font-weight: 700; }
        .meta { background: rgba(255,255,255,0.1); padding: 20px; border-radius: 8px; margin-top: 20px; }
        .meta-item { display: flex; justify-content: space-between; margin-bottom: 8px; font-size: 0.9rem; }
        .content { padding: 40px; }
        .content h1, .content h2, .content h3 { color: #2d3748; margin: 30px 0 15px 0; }
        .content h1 { font-size: 2rem; border-bottom: 3px solid #667eea; padding-bottom: 10px; }
        .content h2 { font-size: 1.5rem; color: #4a5568; }
        .content h3 { font-size: 1.2rem; color: #718096; }
        .content p { margin-bottom: 15px; }
        .content ul { margin: 15px 0; padding-left: 20px; }
        .content li { margin-bottom: 8px; }
        .code-comparison { margin: 30px 0; border-radius: 12px; overflow: hidden; box-shadow: 0 10px 30px rgba(0,0,0,0.1); }
        .before-after-container { display: grid; grid-template-columns: 1fr 1fr; }
        .code-block { background: #1a202c; color: #e2e8f0; overflow: hidden; }
        .code-block.single { margin: 20px 0; border-radius: 8px; }
        .code-block.before { border-right: 2px solid #e53e3e; }
        .code-block.after { border-left: 2px solid #38a169; }
        .code-header { background: #2d3748; padding: 12px 20px; border-bottom: 1px solid #4a5568; display: flex; align-items: center; font-weight: 600; font-size: 0.9rem; }
        .code-block.before .code-header { background: #742a2a; }
        .code-block.after .code-header { background: #22543d; }
        .status-icon { margin-right: 8px; }
        .language-tag { background: #4a5568; padding: 4px 8px; border-radius: 4px; font-size: 0.8rem; }
        .code-content { padding: 20px; overflow-x: auto; }
        .code-content pre { font-family: 'Fira Code', 'Monaco', 'Consolas', monospace; font-size: 0.9rem; line-height: 1.4; white-space: pre-wrap; word-wrap: break-word; }
        .footer { background: #f7fafc; padding: 30px 40px; text-align: center; color: #718096; border-top: 1px solid #e2e8f0; }
        @media (max-width: 768px) {
            .before-after-container { grid-template-columns: 1fr; }
            .code-block.before { border-right: none; border-bottom: 2px solid #e53e3e; }
            .code-block.after { border-left: none; border-top: 2px solid #38a169; }
            .content { padding: 20px; }
        }
"#;
