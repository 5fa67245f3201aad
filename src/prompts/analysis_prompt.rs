use crate::prompts::prompt_context::PromptContext;

pub const CODE_START_MARKER: &str = "--- CODE START ---";
pub const CODE_END_MARKER: &str = "--- CODE END ---";

pub fn build_analysis_prompt(context: &PromptContext<'_>) -> String {
    format!(
        r#"
You are a code-quality expert in {project_type} (v{version}), reviewing on the {model} model.
Analyze the file named "{file_name}" between the markers below and return your review in Markdown:

{code_start}
{code}
{code_end}

**1. File Overview**
- One-sentence summary of what this file does.

**2. Quality Metrics**
Provide a value (e.g. "▶ Readability: 7/10") for each of:
- Readability
- Maintainability
- Complexity
- Conformance to {project_type} best practices
- Performance
- Security

**3. Overall Score**
- Overall rating (0-10) with a one-sentence justification.

**4. Issues Found**
Find at least **3 distinct issues**. For each issue, include:
- **Title** (e.g. "Inefficient re-rendering")
- **Severity**: Low / Medium / High
- **Lines**: <code>Lines X-Y</code>
- **Original snippet**: <code>// snippet here</code>
- **Problem**: one-sentence explanation
- **Refactored snippet**: <code>// improved code here</code>
- **Improvement rationale**: one sentence on why this fixes it

**5. Recommendations & Next Steps**
- List any tools or docs to measure and enforce these improvements.

**Additional Instructions:**
- Do not rewrite the entire file, only the minimal snippets needed.
- Write the whole review in {response_locale}.
"#,
        project_type = context.project_type,
        version = context.version,
        model = context.model,
        file_name = context.file_name,
        code_start = CODE_START_MARKER,
        code = context.code,
        code_end = CODE_END_MARKER,
        response_locale = context.response_locale(),
    )
}
