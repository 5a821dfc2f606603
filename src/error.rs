// src/error.rs
//! Failure kinds reported by the signer

use std::fmt;
use std::io;

/// Everything that can stop a signing run.
#[derive(Debug)]
pub enum SignError {
    /// Bad or missing command line arguments
    Usage(String),

    /// Boot block does not fit in the code area of the sector
    TooLarge { size: usize, max: usize },

    /// Reading or writing the boot block failed
    Io { context: String, source: io::Error },
}

impl SignError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        SignError::Io {
            context: context.into(),
            source,
        }
    }

    /// Every failure exits with the same status; the message tells them apart.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, SignError::Usage(_))
    }
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignError::Usage(text) => write!(f, "{}", text.trim_end()),
            SignError::TooLarge { size, max } => {
                write!(f, "boot block too large ({} bytes (max {}))", size, max)
            }
            SignError::Io { context, source } => {
                write!(f, "an exception occurred: {}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for SignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
