use std::error::Error;
use std::fmt;

/// Custom error type for recoverable lookup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    KeyNotFound(String), // Formatted key that was searched for
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupError::KeyNotFound(key) => write!(f, "No element with key {} in container", key),
        }
    }
}

impl Error for LookupError {}
