pub mod ai_provider_error;
pub mod analysis_target;
pub mod batch_mode;
pub mod commands;
