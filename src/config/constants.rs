use std::time::Duration;

pub const TOOL_NAME: &str = "rn-ai-optimize";
pub const CONFIG_FILE_NAME: &str = ".rn-ai-optimize.json";
pub const DOTENV_FILE_NAME: &str = ".env";
pub const DEFAULT_RESULTS_DIR: &str = "ai-results";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const CHAT_TEMPERATURE: f32 = 0.3;
pub const EMPTY_RESPONSE_FALLBACK: &str = "No response from AI.";

pub const DEFAULT_BATCH_DELAY_MILLIS: u64 = 2000;

/// Extensions accepted for analysis, without the leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Substrings that mark a file as UI framework code.
pub const UI_FRAMEWORK_MARKERS: &[&str] = &["react", "React"];

/// Files whose presence in the working directory marks an Expo project.
pub const EXPO_MARKERS: &[&str] = &["app.json", "app.config.js"];

/// Directories never descended into during discovery.
pub const DISCOVERY_SKIP_DIRS: &[&str] = &["node_modules", ".git"];

pub const SUPPORTED_LANGUAGES: &[&str] = &["pt", "en"];

pub const MODEL_CHOICES: &[(&str, &str)] = &[
    ("GPT-4o", "gpt-4o"),
    ("GPT-4", "gpt-4"),
    ("GPT-3.5 Turbo", "gpt-3.5-turbo"),
];

pub const LANGUAGE_CHOICES: &[(&str, &str)] = &[
    ("Português", "pt"),
    ("English", "en"),
];

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
