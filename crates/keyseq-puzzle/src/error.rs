//! Error types for puzzle configuration and setup.
//!
//! Runtime key presses never fail; everything here is raised while loading a
//! configuration or building a controller.

use thiserror::Error;

/// Result type for puzzle setup operations.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Error codes for configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Key set is empty
    EmptyKeySet,
    /// E002: Puzzle length is zero
    ZeroPuzzleLength,
    /// E003: Key identifier appears more than once
    DuplicateKey,
    /// E004: Key identifier is empty or whitespace
    BlankKey,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyKeySet => "E001",
            ErrorCode::ZeroPuzzleLength => "E002",
            ErrorCode::DuplicateKey => "E003",
            ErrorCode::BlankKey => "E004",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for configuration validation and controller setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Puzzle length exceeds the key set and will be clamped
    LengthClamped,
    /// W002: No scare effect registered
    MissingScareEffect,
    /// W003: No success sound registered
    MissingSuccessSound,
    /// W004: No reward registered
    MissingReward,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::LengthClamped => "W001",
            WarningCode::MissingScareEffect => "W002",
            WarningCode::MissingSuccessSound => "W003",
            WarningCode::MissingReward => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "keys\[2\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Errors raised while loading a configuration or building a controller.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Configuration failed validation.
    #[error("invalid puzzle configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    /// Get the error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidConfig(_) => "PUZZLE_001",
            PuzzleError::Json(_) => "PUZZLE_002",
            PuzzleError::Io(_) => "PUZZLE_003",
        }
    }

    /// Returns the validation errors, if this is a configuration error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            PuzzleError::InvalidConfig(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::EmptyKeySet.code(), "E001");
        assert_eq!(ErrorCode::ZeroPuzzleLength.code(), "E002");
        assert_eq!(ErrorCode::DuplicateKey.code(), "E003");
        assert_eq!(ErrorCode::BlankKey.code(), "E004");
    }

    #[test]
    fn test_warning_codes() {
        assert_eq!(WarningCode::LengthClamped.code(), "W001");
        assert_eq!(WarningCode::MissingReward.code(), "W004");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::EmptyKeySet, "key set is empty");
        assert_eq!(err.to_string(), "E001: key set is empty");

        let err_with_path =
            ValidationError::with_path(ErrorCode::DuplicateKey, "duplicate key 'C4'", "keys[3]");
        assert_eq!(
            err_with_path.to_string(),
            "E003: duplicate key 'C4' (at keys[3])"
        );
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::success();
        assert!(result.is_ok());

        result.add_warning(ValidationWarning::new(WarningCode::LengthClamped, "clamped"));
        assert!(result.is_ok());

        result.add_error(ValidationError::new(ErrorCode::ZeroPuzzleLength, "zero"));
        assert!(!result.is_ok());
        assert_eq!(result.clone().into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn test_invalid_config_message_lists_errors() {
        let err = PuzzleError::InvalidConfig(vec![
            ValidationError::new(ErrorCode::EmptyKeySet, "key set is empty"),
            ValidationError::new(ErrorCode::ZeroPuzzleLength, "puzzle_length must be positive"),
        ]);

        let message = err.to_string();
        assert!(message.contains("E001: key set is empty"));
        assert!(message.contains("E002: puzzle_length must be positive"));
        assert_eq!(err.code(), "PUZZLE_001");
        assert_eq!(err.validation_errors().len(), 2);
    }
}
