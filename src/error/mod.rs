//! Error handling for the sweep plotter

use thiserror::Error;

/// Custom error types for the sweep plotter
#[derive(Error, Debug)]
pub enum AppError {
    /// CLI or option validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input results file does not exist
    #[error("File '{0}' not found")]
    FileNotFound(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Results document parses as JSON but lacks the expected structure,
    /// or is not valid JSON at all
    #[error("Malformed results document: {0}")]
    MalformedInput(String),

    /// Chart rendering errors from the plotting backend
    #[error("Render error: {0}")]
    Render(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new file-not-found error naming the missing path
    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        Self::FileNotFound(path.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new malformed-input error
    pub fn malformed_input<S: Into<String>>(message: S) -> Self {
        Self::MalformedInput(message.into())
    }

    /// Create a new render error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::FileNotFound(_) => "FILE",
            Self::Io(_) => "IO",
            Self::MalformedInput(_) => "PARSE",
            Self::Render(_) => "RENDER",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the command line arguments and option combinations.", msg)
            }
            Self::FileNotFound(path) => {
                format!("File '{}' not found\n\nSuggestion: Check the path, or run the sweep first to produce a results file.", path)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check file permissions and disk space.", msg)
            }
            Self::MalformedInput(msg) => {
                format!("Failed to parse results document: {}\n\nSuggestion: The file must contain 'metadata' and 'results' fields as produced by the sweep tool.", msg)
            }
            Self::Render(msg) => {
                format!("Chart rendering failed: {}\n\nSuggestion: Check that the output directory is writable.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            // Invalid usage, missing input, or unparseable input
            Self::Validation(_) | Self::FileNotFound(_) | Self::MalformedInput(_) => 1,
            Self::Io(_) => 2,       // Other file system issues
            Self::Render(_) => 5,   // Rendering issues
            Self::Internal(_) => 99, // Internal errors
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// Convenient Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_path() {
        let err = AppError::file_not_found("results/missing.json");
        assert_eq!(err.to_string(), "File 'results/missing.json' not found");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(AppError::validation("x").category(), "VALIDATION");
        assert_eq!(AppError::file_not_found("x").category(), "FILE");
        assert_eq!(AppError::io("x").category(), "IO");
        assert_eq!(AppError::malformed_input("x").category(), "PARSE");
        assert_eq!(AppError::render("x").category(), "RENDER");
        assert_eq!(AppError::internal("x").category(), "INTERNAL");
    }

    #[test]
    fn test_exit_codes_are_nonzero() {
        let errors = vec![
            AppError::validation("v"),
            AppError::file_not_found("f"),
            AppError::io("i"),
            AppError::malformed_input("m"),
            AppError::render("r"),
            AppError::internal("x"),
        ];
        for err in errors {
            assert!(err.exit_code() != 0, "{} must exit non-zero", err.category());
        }
    }

    #[test]
    fn test_serde_error_maps_to_malformed_input() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let app_err: AppError = parse_err.into();
        assert_eq!(app_err.category(), "PARSE");
        assert_eq!(app_err.exit_code(), 1);
    }

    #[test]
    fn test_user_friendly_messages_contain_suggestion() {
        let err = AppError::malformed_input("missing field `results`");
        let msg = err.user_friendly_message();
        assert!(msg.contains("missing field `results`"));
        assert!(msg.contains("Suggestion:"));
    }
}
