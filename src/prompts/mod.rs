pub mod analysis_prompt;
pub mod prompt_context;
pub mod terminal_summary_prompt;
