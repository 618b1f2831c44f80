//! Platform definition for vendor-specific output checks.

/// Platform definition containing vendor-specific failure detection.
///
/// Many CLIs report a rejected line in the command output rather than via
/// the transport. A platform lists the substrings that mark such output so
/// [`CheckedDevice`](crate::device::CheckedDevice) can turn them into errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDefinition {
    /// Platform name (e.g., "cisco_iosxe").
    pub name: String,

    /// Patterns that indicate command failure.
    pub failed_when_contains: Vec<String>,
}

impl PlatformDefinition {
    /// Create a new platform definition with no failure patterns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            failed_when_contains: vec![],
        }
    }

    /// Add a failure pattern.
    pub fn with_failure_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.failed_when_contains.push(pattern.into());
        self
    }

    /// Return the first failure pattern found in `output`.
    pub fn detect_failure(&self, output: &str) -> Option<&str> {
        self.failed_when_contains
            .iter()
            .find(|pattern| output.contains(pattern.as_str()))
            .map(String::as_str)
    }
}
