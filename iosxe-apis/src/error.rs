//! Error types for iosxe-apis.

use std::io;
use thiserror::Error;

/// Main error type for configuration operations.
///
/// Every operation in this crate reports failure through the single
/// [`Error::SubCommandFailure`] kind. The message names the operation that was
/// attempted and embeds the device's own error text; the device error is also
/// kept as the error source.
#[derive(Error, Debug)]
pub enum Error {
    /// The device failed to apply or execute a command sequence.
    #[error("{message}")]
    SubCommandFailure {
        message: String,
        #[source]
        source: DeviceError,
    },
}

impl Error {
    /// Wrap a device failure with the context of the operation that caused it.
    pub fn sub_command(context: impl AsRef<str>, source: DeviceError) -> Self {
        Self::SubCommandFailure {
            message: format!("{}. Error: {}", context.as_ref(), source),
            source,
        }
    }

    /// The device error this failure was raised from.
    pub fn device_error(&self) -> &DeviceError {
        match self {
            Self::SubCommandFailure { source, .. } => source,
        }
    }
}

/// Errors reported by a [`Device`](crate::device::Device) implementation.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// Device handle is not connected
    #[error("Device not connected")]
    NotConnected,

    /// The device rejected a command
    #[error("Command failed: {message}")]
    CommandFailed { message: String },

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Any other transport-specific failure
    #[error("{0}")]
    Other(String),
}

/// Result type alias using iosxe-apis's Error.
pub type Result<T> = std::result::Result<T, Error>;
