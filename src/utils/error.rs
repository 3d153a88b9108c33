use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid book {field}: {reason}")]
    InvalidBook { field: String, reason: String },

    #[error("Invalid year format: '{value}'")]
    InvalidYearFormat { value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    /// 提供給使用者的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("I/O failed: {}", e),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let setting = DemoError::InvalidConfigValueError {
            field: "validation.max_year".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 9999".to_string(),
        };
        assert_eq!(
            setting.user_friendly_message(),
            "Setting 'validation.max_year' is invalid: Value must be between 1 and 9999"
        );

        let year = DemoError::InvalidYearFormat {
            value: "abcd".to_string(),
        };
        assert_eq!(year.user_friendly_message(), year.to_string());

        let config = DemoError::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(config.user_friendly_message(), "Configuration problem: missing");
    }
}
