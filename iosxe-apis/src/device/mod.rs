//! Device collaborator contract.
//!
//! The wrappers in [`crate::iosxe`] never talk to a network device directly.
//! They render [`ConfigLines`] and hand them to a [`Device`], which is whatever
//! transport the caller already has: an SSH driver, a console server, a NETCONF
//! CLI passthrough, or a dry-run printer.

mod checked;
pub mod config;
#[cfg(test)]
pub(crate) mod mock;

pub use checked::CheckedDevice;
pub use config::ConfigLines;

use std::future::Future;

use log::debug;

use crate::error::{DeviceError, Error, Result};

/// Trait for device handles.
///
/// Implementations own the connection and any prompt/mode handling. Both
/// operations return the device's textual output.
pub trait Device: Send {
    /// Name used in log and error messages.
    fn name(&self) -> &str;

    /// Apply configuration lines in configuration mode.
    ///
    /// Lines are sent in order. The implementation is responsible for
    /// entering and leaving configuration mode.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use iosxe_apis::device::Device;
    ///
    /// # async fn example(device: &mut impl Device) -> Result<(), iosxe_apis::DeviceError> {
    /// let output = device
    ///     .configure(&[
    ///         "interface GigabitEthernet1/0/1".to_string(),
    ///         "spanning-tree guard root".to_string(),
    ///     ])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    fn configure(
        &mut self,
        lines: &[String],
    ) -> impl Future<Output = std::result::Result<String, DeviceError>> + Send;

    /// Run a single exec-mode command and return its output.
    fn execute(
        &mut self,
        command: &str,
    ) -> impl Future<Output = std::result::Result<String, DeviceError>> + Send;
}

/// Apply `config` to `device`, wrapping any failure with `context`.
///
/// The device output is discarded; every configuration wrapper returns `()`
/// on success.
pub async fn apply<D: Device>(device: &mut D, config: &ConfigLines, context: &str) -> Result<()> {
    debug!(
        "{}: sending {} configuration line(s)",
        device.name(),
        config.len()
    );

    device
        .configure(config.as_slice())
        .await
        .map(|_| ())
        .map_err(|e| Error::sub_command(context, e))
}

/// Execute `command` on `device`, wrapping any failure with `context`.
pub async fn run<D: Device>(device: &mut D, command: &str, context: &str) -> Result<String> {
    debug!("{}: executing '{}'", device.name(), command);

    device
        .execute(command)
        .await
        .map_err(|e| Error::sub_command(context, e))
}
