//! 802.1X, MAB and IBNS 2.0 (identity-based networking) configuration.
//!
//! IOS-XE switches run identity configuration in either the legacy
//! `authentication ...` style or the new `access-session ...` style. Most
//! interface-level commands take a [`CliStyle`] to pick the keyword;
//! commands that only exist in new style call [`detect_cli_style`] and
//! prepend the forced conversion when the switch is still in legacy mode.

mod access_session;
mod authentication;
mod credentials;
mod templates;

pub use access_session::*;
pub use authentication::*;
pub use credentials::*;
pub use templates::*;

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::device::{Device, run};
use crate::error::Result;

/// Exec command reporting the current identity configuration style.
pub const CONFIG_MODE_QUERY: &str = "authentication display config-mode";

/// Configuration line that converts a legacy switch to new style.
pub const CONVERT_TO_NEW_STYLE: &str = "authentication convert-to new-style forced";

/// Marker in [`CONFIG_MODE_QUERY`] output for a legacy switch.
const LEGACY_MARKER: &str = "legacy";

/// Treat an empty optional argument as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Identity configuration style of a switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CliStyle {
    /// `authentication ...` commands
    #[default]
    Legacy,
    /// `access-session ...` commands (IBNS 2.0)
    New,
}

impl CliStyle {
    /// Command keyword used for host-mode and port-control in this style.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Legacy => "authentication",
            Self::New => "access-session",
        }
    }
}

impl fmt::Display for CliStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::New => f.write_str("new-style"),
        }
    }
}

/// Ask the switch which identity configuration style it is running.
///
/// Output mentioning `legacy` yields [`CliStyle::Legacy`]; anything else is
/// treated as new style.
pub async fn detect_cli_style<D: Device>(device: &mut D) -> Result<CliStyle> {
    let output = run(
        device,
        CONFIG_MODE_QUERY,
        "Failed to read the authentication config mode",
    )
    .await?;

    let style = if output.contains(LEGACY_MARKER) {
        CliStyle::Legacy
    } else {
        CliStyle::New
    };
    debug!("{}: identity config style is {}", device.name(), style);
    Ok(style)
}
