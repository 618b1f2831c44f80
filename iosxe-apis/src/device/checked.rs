//! Device adapter that turns CLI error output into failures.

use log::warn;

use super::Device;
use crate::error::DeviceError;
use crate::platform::PlatformDefinition;
use crate::platform::vendors::cisco_iosxe;

/// Wraps a [`Device`] and inspects every output for platform failure patterns.
///
/// Transports that only wait for the next prompt report success even when the
/// CLI rejected a line. `CheckedDevice` scans the returned output against the
/// platform's `failed_when_contains` list and reports a hit as
/// [`DeviceError::CommandFailed`].
///
/// # Example
///
/// ```rust,no_run
/// use iosxe_apis::device::{CheckedDevice, Device};
/// use iosxe_apis::iosxe::spanning_tree;
///
/// # async fn example(transport: impl Device) -> Result<(), iosxe_apis::Error> {
/// let mut device = CheckedDevice::iosxe(transport);
/// spanning_tree::configure_spanning_tree_backbonefast(&mut device).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CheckedDevice<D> {
    inner: D,
    platform: PlatformDefinition,
}

impl<D: Device> CheckedDevice<D> {
    /// Wrap `inner` using the given platform's failure patterns.
    pub fn new(inner: D, platform: PlatformDefinition) -> Self {
        Self { inner, platform }
    }

    /// Wrap `inner` using the built-in IOS-XE failure patterns.
    pub fn iosxe(inner: D) -> Self {
        Self::new(inner, cisco_iosxe::platform())
    }

    /// Get a reference to the platform definition.
    pub fn platform(&self) -> &PlatformDefinition {
        &self.platform
    }

    /// Get a reference to the wrapped device.
    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Get a mutable reference to the wrapped device.
    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.inner
    }

    /// Unwrap the adapter.
    pub fn into_inner(self) -> D {
        self.inner
    }

    fn check(&self, command: &str, output: String) -> Result<String, DeviceError> {
        match self.platform.detect_failure(&output) {
            Some(pattern) => {
                warn!(
                    "{}: '{}' in output of '{}'",
                    self.inner.name(),
                    pattern,
                    command
                );
                Err(DeviceError::CommandFailed {
                    message: format!("'{pattern}' in output of '{command}':\n{output}"),
                })
            }
            None => Ok(output),
        }
    }
}

impl<D: Device> Device for CheckedDevice<D> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn configure(&mut self, lines: &[String]) -> Result<String, DeviceError> {
        let output = self.inner.configure(lines).await?;
        self.check(&lines.join("; "), output)
    }

    async fn execute(&mut self, command: &str) -> Result<String, DeviceError> {
        let output = self.inner.execute(command).await?;
        self.check(command, output)
    }
}
