use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing input: {field}")]
    MissingInput { field: String },

    #[error("Invalid parameter '{field}' = '{value}': {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecipeError {
    pub fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        RecipeError::InvalidParameter {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RecipeError::InvalidParameter { .. } | RecipeError::MissingInput { .. } => {
                ErrorCategory::Input
            }
            RecipeError::ConfigError { .. } => ErrorCategory::Configuration,
            RecipeError::SerializationError(_) | RecipeError::CsvError(_) => ErrorCategory::Output,
            RecipeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RecipeError::InvalidParameter { field, value, reason } => {
                format!("Input '{}' rejected ({}): {}", field, value, reason)
            }
            RecipeError::MissingInput { field } => {
                format!("Input '{}' is required but was not provided", field)
            }
            RecipeError::ConfigError { message } => format!("Configuration problem: {}", message),
            RecipeError::IoError(e) => format!("Could not read or write a file: {}", e),
            RecipeError::SerializationError(e) => format!("Could not format the recipe: {}", e),
            RecipeError::CsvError(e) => format!("Could not write the step table: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecipeError::InvalidParameter { .. } => {
                "Check the value against `lextract --list` and the allowed water range"
            }
            RecipeError::MissingInput { .. } => {
                "Pass the input as a flag or add it to the [brew] table of the config file"
            }
            RecipeError::ConfigError { .. } => "Make sure the config file is valid TOML",
            RecipeError::IoError(_) => "Check that the path exists and is readable",
            RecipeError::SerializationError(_) | RecipeError::CsvError(_) => {
                "Try another output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_is_input_error() {
        let err = RecipeError::invalid("target_water_cc", -5.0, "must be positive");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("target_water_cc"));
        assert!(err.user_friendly_message().contains("-5"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: RecipeError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
