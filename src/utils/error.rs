use std::error::Error;
use std::fmt;

/// Error types for Rustoc operations
#[derive(Debug)]
pub enum RustocError {
    /// Settings payload could not be read
    Config(String),
    /// A heading-level list was configured but contained no valid levels
    NoHeadingsConfigured,
    /// Edit application was rejected
    Apply(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for RustocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RustocError::NoHeadingsConfigured => write!(f, "No valid heading levels configured"),
            RustocError::Apply(msg) => write!(f, "Edit application error: {}", msg),
            RustocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RustocError {}

impl From<String> for RustocError {
    fn from(msg: String) -> Self {
        RustocError::Generic(msg)
    }
}

impl From<&str> for RustocError {
    fn from(msg: &str) -> Self {
        RustocError::Generic(msg.to_string())
    }
}
