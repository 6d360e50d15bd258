use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MetricsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MetricsError::IoError(_) => ErrorCategory::Io,
            MetricsError::CsvError(_)
            | MetricsError::SerializationError(_)
            | MetricsError::ProcessingError { .. } => ErrorCategory::Data,
            MetricsError::InvalidConfigValueError { .. }
            | MetricsError::MissingConfigError { .. }
            | MetricsError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MetricsError::CsvError(_) | MetricsError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            MetricsError::ProcessingError { .. }
            | MetricsError::InvalidConfigValueError { .. }
            | MetricsError::MissingConfigError { .. }
            | MetricsError::ConfigValidationError { .. } => ErrorSeverity::High,
            MetricsError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MetricsError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            MetricsError::CsvError(_) => {
                "Check the meet export: it needs a header row with at least id and date columns"
                    .to_string()
            }
            MetricsError::SerializationError(_) => {
                "Check that the JSON export is an array of meet objects".to_string()
            }
            MetricsError::InvalidConfigValueError { field, .. }
            | MetricsError::MissingConfigError { field }
            | MetricsError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
            MetricsError::ProcessingError { .. } => {
                "Run with --verbose to see which meet record caused the problem".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Data => format!("The meet data could not be processed: {}", self),
            ErrorCategory::Configuration => format!("The configuration is invalid: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;
