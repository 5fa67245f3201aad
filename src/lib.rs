//! rn-ai-optimize: AI code review for React Native source files.
//!
//! A file is sent to a chat-completion model together with a review prompt, a
//! second call condenses the review into a terminal scorecard, and the full
//! review is written to `ai-results/` as Markdown (optionally HTML).

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod i18n;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
