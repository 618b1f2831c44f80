//! Ordered configuration line builder.

use std::fmt;
use std::slice;

/// An ordered sequence of configuration-mode lines.
///
/// Lines never carry a trailing newline; [`Display`](fmt::Display) joins
/// them with `\n` for transports that want a single block.
///
/// # Example
///
/// ```rust
/// use iosxe_apis::ConfigLines;
///
/// let eap_profile: Option<&str> = Some("EAP-P1");
/// let config = ConfigLines::new()
///     .line("interface GigabitEthernet1/0/1")
///     .line("dot1x pae supplicant")
///     .line_opt(eap_profile, |p| format!("dot1x supplicant eap profile {p}"));
///
/// assert_eq!(config.len(), 3);
/// assert_eq!(
///     config.to_string(),
///     "interface GigabitEthernet1/0/1\ndot1x pae supplicant\ndot1x supplicant eap profile EAP-P1"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLines {
    lines: Vec<String>,
}

impl ConfigLines {
    /// Create an empty line sequence.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a line only when `condition` holds.
    pub fn line_if(mut self, condition: bool, line: impl FnOnce() -> String) -> Self {
        if condition {
            self.lines.push(line());
        }
        self
    }

    /// Append a line rendered from `value` when it is present.
    pub fn line_opt<T>(mut self, value: Option<T>, render: impl FnOnce(T) -> String) -> Self {
        if let Some(value) = value {
            self.lines.push(render(value));
        }
        self
    }

    /// Append every line from an iterator.
    pub fn lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append a line in place.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Get the lines as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no lines have been added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Take ownership of the lines.
    pub fn into_inner(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for ConfigLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl From<&str> for ConfigLines {
    fn from(line: &str) -> Self {
        Self::new().line(line)
    }
}

impl From<String> for ConfigLines {
    fn from(line: String) -> Self {
        Self::new().line(line)
    }
}

impl From<Vec<String>> for ConfigLines {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl<S: Into<String>> FromIterator<S> for ConfigLines {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new().lines(iter)
    }
}

impl<'a> IntoIterator for &'a ConfigLines {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
