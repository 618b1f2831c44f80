//! Recording device used by unit tests.

use std::collections::HashMap;

use super::Device;
use crate::error::DeviceError;

/// In-memory device that records every configure/execute call.
///
/// Exec commands answer from a scripted response table (empty string when
/// unscripted). `failing` makes every configure call fail; `failing_exec`
/// does the same for exec commands.
#[derive(Debug, Default)]
pub(crate) struct MockDevice {
    name: String,
    configured: Vec<Vec<String>>,
    executed: Vec<String>,
    responses: HashMap<String, String>,
    configure_output: String,
    configure_failure: Option<String>,
    execute_failure: Option<String>,
}

impl MockDevice {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn with_response(mut self, command: &str, output: &str) -> Self {
        self.responses
            .insert(command.to_string(), output.to_string());
        self
    }

    pub(crate) fn with_configure_output(mut self, output: &str) -> Self {
        self.configure_output = output.to_string();
        self
    }

    pub(crate) fn failing(mut self, message: &str) -> Self {
        self.configure_failure = Some(message.to_string());
        self
    }

    pub(crate) fn failing_exec(mut self, message: &str) -> Self {
        self.execute_failure = Some(message.to_string());
        self
    }

    /// Lines of the most recent configure call.
    pub(crate) fn last_config(&self) -> &[String] {
        self.configured.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every configure call, in order.
    pub(crate) fn configured(&self) -> &[Vec<String>] {
        &self.configured
    }

    /// Every exec command, in order.
    pub(crate) fn executed(&self) -> &[String] {
        &self.executed
    }
}

impl Device for MockDevice {
    fn name(&self) -> &str {
        &self.name
    }

    async fn configure(&mut self, lines: &[String]) -> Result<String, DeviceError> {
        self.configured.push(lines.to_vec());
        match &self.configure_failure {
            Some(message) => Err(DeviceError::CommandFailed {
                message: message.clone(),
            }),
            None => Ok(self.configure_output.clone()),
        }
    }

    async fn execute(&mut self, command: &str) -> Result<String, DeviceError> {
        self.executed.push(command.to_string());
        if let Some(message) = &self.execute_failure {
            return Err(DeviceError::CommandFailed {
                message: message.clone(),
            });
        }
        Ok(self.responses.get(command).cloned().unwrap_or_default())
    }
}

/// Error text returned by devices built through [`assert_wrapped_failure!`].
pub(crate) const REJECTED: &str = "% Invalid input detected at '^' marker.";

/// Run one operation against a failing [`MockDevice`] and check that the
/// returned error is `"<context>. Error: Command failed: <device text>"`.
///
/// The plain form fails configure calls; the `exec` form fails exec calls.
macro_rules! assert_wrapped_failure {
    ($device:ident => $call:expr, $context:expr) => {{
        #[allow(unused_mut)]
        let mut $device = $crate::device::mock::MockDevice::new("SW1")
            .failing($crate::device::mock::REJECTED);
        let err = $call.await.expect_err("operation should fail");
        assert_eq!(
            err.to_string(),
            format!(
                "{}. Error: Command failed: {}",
                $context,
                $crate::device::mock::REJECTED
            )
        );
    }};
    (exec $device:ident => $call:expr, $context:expr) => {{
        #[allow(unused_mut)]
        let mut $device = $crate::device::mock::MockDevice::new("SW1")
            .failing_exec($crate::device::mock::REJECTED);
        let err = $call.await.expect_err("operation should fail");
        assert_eq!(
            err.to_string(),
            format!(
                "{}. Error: Command failed: {}",
                $context,
                $crate::device::mock::REJECTED
            )
        );
    }};
}

pub(crate) use assert_wrapped_failure;
