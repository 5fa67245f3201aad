//! English and Portuguese console messages.
//!
//! The locale is detected once at startup and handed to every component that
//! prints something for the user.

mod messages;

pub use messages::Message;

use chrono::{DateTime, Local, Utc};
use crate::errors::OptimizeError;

pub const LOCALE_ENV: &str = "LANG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// `pt`, `pt_BR.UTF-8`, ... select Portuguese, anything else English.
    pub fn detect(lang: Option<&str>) -> Self {
        match lang {
            Some(value) if value.to_lowercase().starts_with("pt") => Self::Pt,
            _ => Self::En,
        }
    }

    pub fn from_env() -> Self {
        Self::detect(std::env::var(LOCALE_ENV).ok().as_deref())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    pub fn html_lang(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt-BR",
        }
    }

    pub fn format_datetime(&self, timestamp: &DateTime<Utc>) -> String {
        let local = timestamp.with_timezone(&Local);
        match self {
            Self::En => local.format("%m/%d/%Y, %I:%M:%S %p").to_string(),
            Self::Pt => local.format("%d/%m/%Y %H:%M:%S").to_string(),
        }
    }

    pub(crate) fn pick(&self, en: &'static str, pt: &'static str) -> &'static str {
        match self {
            Self::En => en,
            Self::Pt => pt,
        }
    }

    /// Localized text for the errors a user can fix themselves.
    pub fn describe_error(&self, error: &OptimizeError) -> String {
        match error {
            OptimizeError::FileNotFound { file_path } => self.text(Message::NotFound { file: file_path }),
            OptimizeError::UnsupportedExtension { .. } => self.text(Message::InvalidFileType),
            OptimizeError::MissingApiKey { env_var, description } => format!(
                "{}\n💡 {}",
                self.text(Message::ApiKeyNotFound { env: env_var }),
                description
            ),
            other => other.user_message(),
        }
    }
}

/// Replaces every `{key}` placeholder with its value.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{}}}", key), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn detects_portuguese_from_lang_prefix() {
        assert_eq!(Locale::detect(Some("pt_BR.UTF-8")), Locale::Pt);
        assert_eq!(Locale::detect(Some("pt")), Locale::Pt);
        assert_eq!(Locale::detect(Some("en_US.UTF-8")), Locale::En);
        assert_eq!(Locale::detect(Some("")), Locale::En);
        assert_eq!(Locale::detect(None), Locale::En);
    }

    #[test]
    fn interpolate_replaces_all_occurrences() {
        let text = interpolate("{file} and {file} in {dir}", &[("file", "a.tsx"), ("dir", "src")]);
        assert_eq!(text, "a.tsx and a.tsx in src");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("{missing}", &[("file", "x")]), "{missing}");
    }

    #[test]
    fn describe_error_localizes_not_found() {
        let error = OptimizeError::not_found("src/Button.tsx");
        assert_eq!(Locale::En.describe_error(&error), "File not found: src/Button.tsx");
        assert_eq!(Locale::Pt.describe_error(&error), "Arquivo não encontrado: src/Button.tsx");
    }

    #[test]
    fn describe_error_falls_back_to_user_message() {
        let error = OptimizeError::api_error("timeout");
        assert_eq!(Locale::Pt.describe_error(&error), error.user_message());
    }

    #[test]
    fn datetime_formats_differ_by_locale() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let en = Locale::En.format_datetime(&ts);
        let pt = Locale::Pt.format_datetime(&ts);
        assert!(en.contains(", "));
        assert!(pt.contains("/2024 "));
        assert_ne!(en, pt);
    }
}
