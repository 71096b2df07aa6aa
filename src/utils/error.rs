use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Incorrect day {day}, should be between 1 and 25")]
    DayOutOfRangeError { day: u32 },

    #[error("File {} already exists", .path.display())]
    StubExistsError { path: PathBuf },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error at {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Filesystem,
}

impl ScaffoldError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // An existing stub is a safe no-op, not a failure.
            ScaffoldError::StubExistsError { .. } => ErrorSeverity::Low,
            ScaffoldError::DayOutOfRangeError { .. }
            | ScaffoldError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ScaffoldError::IoError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaffoldError::DayOutOfRangeError { .. }
            | ScaffoldError::InvalidConfigValueError { .. } => ErrorCategory::Validation,
            ScaffoldError::StubExistsError { .. } => ErrorCategory::Conflict,
            ScaffoldError::IoError { .. } => ErrorCategory::Filesystem,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScaffoldError::StubExistsError { path } => format!(
                "File {} already exists, exiting without doing anything",
                path.display()
            ),
            ScaffoldError::IoError { path, .. } => {
                format!("Could not write {}", path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScaffoldError::DayOutOfRangeError { .. } => {
                "Advent of Code runs from day 1 to day 25".to_string()
            }
            ScaffoldError::StubExistsError { .. } => {
                "Remove the file first if you really want to regenerate it".to_string()
            }
            ScaffoldError::InvalidConfigValueError { field, .. } => {
                format!("Adjust the value passed for {} and try again", field)
            }
            ScaffoldError::IoError { .. } => {
                "Check that the target directory exists and is writable".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
