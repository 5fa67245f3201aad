use std::fmt;
use std::error::Error as StdError;
use crate::enums::ai_provider_error::AiProviderError;
use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub enum OptimizeError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Input validation errors
    FileNotFound {
        file_path: String,
    },
    UnsupportedExtension {
        file_path: String,
        allowed: Vec<String>,
    },
    MissingApiKey {
        env_var: String,
        description: String,
    },

    // Upstream model errors, all collapsed into one kind
    ApiError {
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // User input errors
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl OptimizeError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(file_path: &str) -> Self {
        Self::FileNotFound {
            file_path: file_path.to_string(),
        }
    }

    pub fn unsupported_extension(file_path: &str, allowed: &[&str]) -> Self {
        Self::UnsupportedExtension {
            file_path: file_path.to_string(),
            allowed: allowed.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn missing_api_key(env_var: &str, description: &str) -> Self {
        Self::MissingApiKey {
            env_var: env_var.to_string(),
            description: description.to_string(),
        }
    }

    pub fn api_error(reason: &str) -> Self {
        Self::ApiError {
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// Errors raised before any model call: the input itself is unusable.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::UnsupportedExtension { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::MissingApiKey { .. } => ErrorSeverity::High,
            Self::ApiError { .. } => ErrorSeverity::High,
            Self::FileNotFound { .. } => ErrorSeverity::Medium,
            Self::UnsupportedExtension { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::UserInputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and JSON syntax", path, reason)
            }
            Self::FileNotFound { file_path } => {
                format!("File not found: {}", file_path)
            }
            Self::UnsupportedExtension { file_path, allowed } => {
                format!("Unsupported file type for '{}'. Expected one of: {}", file_path, allowed.join(", "))
            }
            Self::MissingApiKey { env_var, description } => {
                format!("API key not found in environment variable '{}'\n💡 {}", env_var, description)
            }
            Self::ApiError { reason } => {
                format!("OpenAI API Error: {}", reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{}' failed for '{}': {}\n💡 Check file permissions and path", operation, file_path, reason)
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}", content_type, reason)
            }
            Self::UserInputError { input, expected, suggestion } => {
                format!("Invalid input '{}': expected {}\n💡 {}", input, expected, suggestion)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for OptimizeError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for rn-ai-optimize operations
pub type OptimizeResult<T> = Result<T, OptimizeError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Log the technical details and print the localized message.
    pub fn handle_error(error: &OptimizeError, locale: Locale) {
        let severity = error.severity();

        log::debug!("{} [{}] {}", severity.emoji(), severity.name(), error.technical_details());

        eprintln!("❌ {}", locale.describe_error(error));

        if severity == ErrorSeverity::Critical {
            eprintln!("🚨 Critical error detected - application may need to exit");
        }
    }
}

/// Extension trait for Result to name the failed operation
pub trait ResultExt<T> {
    fn with_operation(self, operation: &str) -> OptimizeResult<T>;
    fn with_file_operation(self, file_path: &str, operation: &str) -> OptimizeResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<OptimizeError>,
{
    fn with_operation(self, operation: &str) -> OptimizeResult<T> {
        self.map_err(|e| match e.into() {
            OptimizeError::SystemError { reason, .. } => OptimizeError::SystemError {
                operation: operation.to_string(),
                reason,
            },
            other => other,
        })
    }

    fn with_file_operation(self, file_path: &str, operation: &str) -> OptimizeResult<T> {
        self.map_err(|e| {
            let optimize_error: OptimizeError = e.into();
            match optimize_error {
                OptimizeError::SystemError { reason, .. } => OptimizeError::file_error(file_path, operation, &reason),
                other => other,
            }
        })
    }
}

impl From<std::io::Error> for OptimizeError {
    fn from(error: std::io::Error) -> Self {
        OptimizeError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for OptimizeError {
    fn from(error: serde_json::Error) -> Self {
        OptimizeError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for OptimizeError {
    fn from(error: reqwest::Error) -> Self {
        OptimizeError::ApiError {
            reason: error.to_string(),
        }
    }
}

impl From<AiProviderError> for OptimizeError {
    fn from(error: AiProviderError) -> Self {
        OptimizeError::ApiError {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_collapse_into_api_error() {
        let error: OptimizeError = AiProviderError::AuthenticationError("bad key".to_string()).into();
        assert!(matches!(error, OptimizeError::ApiError { .. }));
        assert!(error.to_string().contains("bad key"));
    }

    #[test]
    fn io_errors_name_the_failed_operation() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"));
        let error = result.with_operation("writing to the terminal").unwrap_err();

        assert!(matches!(error, OptimizeError::SystemError { ref operation, .. } if operation == "writing to the terminal"));
        assert_eq!(error.user_message(), "System error during writing to the terminal: pipe closed");
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn io_errors_become_file_errors_with_operation() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let error = result.with_file_operation("out.md", "write report").unwrap_err();
        match error {
            OptimizeError::FileOperationError { file_path, operation, .. } => {
                assert_eq!(file_path, "out.md");
                assert_eq!(operation, "write report");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn validation_errors_are_flagged() {
        assert!(OptimizeError::not_found("a.tsx").is_validation_error());
        assert!(OptimizeError::unsupported_extension("a.py", &["ts"]).is_validation_error());
        assert!(!OptimizeError::api_error("boom").is_validation_error());
    }
}
