/// Structured error types for fasttrack-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (fasttrack-cli) can still use `anyhow` for
/// convenience, but library consumers get structured errors.
use thiserror::Error;

/// Main error type for fasttrack-core operations
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Snapshot mode string did not match a known mode
    #[error("Unknown snapshot mode '{value}' (expected month-to-date, month-to-date-active, or latest)")]
    UnknownMode { value: String },
}

/// Result type alias for fasttrack-core operations
pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an unknown-mode error
    pub fn unknown_mode(value: impl Into<String>) -> Self {
        Self::UnknownMode {
            value: value.into(),
        }
    }
}
