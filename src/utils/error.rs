use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed row {row}: {message}")]
    ParseError { row: u64, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// 錯誤嚴重程度，用於決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LedgerError {
    pub fn parse(row: u64, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            row,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LedgerError::ValidationError { .. }
            | LedgerError::ConfigError { .. }
            | LedgerError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            LedgerError::ParseError { .. }
            | LedgerError::CsvError(_)
            | LedgerError::SerializationError(_) => ErrorSeverity::High,
            LedgerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LedgerError::IoError(_) => "Check that the data file location exists and is writable",
            LedgerError::CsvError(_) | LedgerError::ParseError { .. } => {
                "Fix the offending row (expected: item,quantity,unit_price) or move the file aside"
            }
            LedgerError::SerializationError(_) => "Retry without --json",
            LedgerError::ConfigError { .. } => "Check the TOML configuration file syntax",
            LedgerError::InvalidConfigValueError { .. } => {
                "Correct the configuration value or pass an override on the command line"
            }
            LedgerError::ValidationError { .. } => "Re-enter the value",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LedgerError::ParseError { row, message } => {
                format!("Sales data file is malformed at row {}: {}", row, message)
            }
            LedgerError::IoError(e) => format!("Could not access the sales data file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
