//! Processor error types.

use thiserror::Error;
use yakulint_parser::ParseError;

/// Errors that can occur while pre-processing a file.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessorError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
