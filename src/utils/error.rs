use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

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

    #[error("Credential file not found: {path}")]
    MissingCredentialError { path: String },

    #[error("API key is empty in {path}")]
    EmptyCredentialError { path: String },

    #[error("Input file not found: {path}")]
    InputNotFoundError { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Credential,
    Input,
    Network,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::HttpClientError(_) => ErrorCategory::Network,
            LookupError::CsvError(_) | LookupError::InputNotFoundError { .. } => {
                ErrorCategory::Input
            }
            LookupError::IoError(_) => ErrorCategory::Output,
            LookupError::MissingCredentialError { .. } | LookupError::EmptyCredentialError { .. } => {
                ErrorCategory::Credential
            }
            LookupError::TomlError(_)
            | LookupError::ConfigError { .. }
            | LookupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LookupError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 啟動前即失敗，沒有任何輸出
            ErrorCategory::Configuration | ErrorCategory::Credential => ErrorSeverity::Critical,
            ErrorCategory::Input | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
        }
    }

    /// 失敗的執行一律以非零狀態結束
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LookupError::MissingCredentialError { path } => {
                format!("Create {} with the Ytel API token on its first line", path)
            }
            LookupError::EmptyCredentialError { path } => {
                format!("Put the Ytel API token on the first line of {}", path)
            }
            LookupError::InputNotFoundError { path } => {
                format!("Check that {} exists or pass --input", path)
            }
            LookupError::ValidationError { .. } | LookupError::CsvError(_) => {
                "Make sure the input is a CSV file with a 'phone_number' header".to_string()
            }
            LookupError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and run again", field)
            }
            LookupError::TomlError(_) | LookupError::ConfigError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            LookupError::HttpClientError(_) => {
                "Check TLS support and network settings on this machine".to_string()
            }
            LookupError::IoError(_) => {
                "Check that the output location is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Credential => format!("Credential problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Cannot read input: {}", self),
            ErrorCategory::Network => format!("Network setup failed: {}", self),
            ErrorCategory::Output => format!("Cannot write output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
