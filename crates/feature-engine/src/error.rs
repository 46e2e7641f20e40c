//! Signal Error Types

use thiserror::Error;

/// Errors raised while configuring a signal or its processors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    /// Window size is not a positive integer
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Processor name not known to the registry
    #[error("Unknown processor: {0}")]
    UnknownProcessor(String),

    /// Wilson amplitude threshold missing or not a number
    #[error("Invalid WAMP threshold: {0}")]
    InvalidThreshold(String),
}
