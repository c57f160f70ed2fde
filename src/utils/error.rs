use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteLexError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Regex compilation failed: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QuoteLexError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not render the JSON report: {}", e),
            Self::RegexError(_) => "Internal lexer rule failed to compile".to_string(),
            Self::ConfigParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an accepted value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the input path exists and is readable".to_string(),
            Self::SerializationError(_) => "Retry with --format text".to_string(),
            Self::RegexError(_) => "Please report this as a bug".to_string(),
            Self::ConfigParseError { .. } => {
                "Fix the TOML syntax or run without --config".to_string()
            }
            Self::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteLexError>;
