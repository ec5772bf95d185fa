use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Integer overflow: {a} + {b} does not fit in i32")]
    OverflowError { a: i32, b: i32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Arithmetic,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::OverflowError { .. } => ErrorCategory::Arithmetic,
            CalcError::ConfigError { .. }
            | CalcError::ConfigParseError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤類型給出建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "The output stream was closed; check the consumer of stdout".to_string()
            }
            CalcError::IoError(_) => "Check that the output stream is writable".to_string(),
            CalcError::OverflowError { .. } => {
                "Use --overflow wrapping or --overflow saturating, or smaller operands".to_string()
            }
            CalcError::ConfigError { .. } | CalcError::ConfigParseError { .. } => {
                "Make sure the job file exists and is valid TOML".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the job file", field)
            }
            CalcError::MissingConfigError { field } => {
                format!("Add the '{}' field to the job file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(_) => format!("Could not write output: {}", self),
            CalcError::OverflowError { a, b } => {
                format!("The sum of {} and {} is too large for a 32-bit integer", a, b)
            }
            _ => self.to_string(),
        }
    }

    /// CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
