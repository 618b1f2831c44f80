//! Cisco IOS-XE platform definition.
//!
//! IOS-XE rejects a configuration line by echoing a `%`-prefixed message and
//! staying in the current mode, so a transport that only watches for the next
//! prompt reports success. The patterns below catch those messages.
//!
//! # Output Examples
//!
//! ```text
//! switch(config)#spanning-tree mode fast
//!                                   ^
//! % Invalid input detected at '^' marker.
//!
//! switch(config)#interface
//! % Incomplete command.
//!
//! switch(config-if)#sp
//! % Ambiguous command:  "sp"
//! ```

use crate::platform::PlatformDefinition;

/// Platform name for Cisco IOS-XE.
pub const PLATFORM_NAME: &str = "cisco_iosxe";

/// Create the Cisco IOS-XE platform definition.
pub fn platform() -> PlatformDefinition {
    PlatformDefinition::new(PLATFORM_NAME)
        .with_failure_pattern("% Invalid input detected")
        .with_failure_pattern("% Incomplete command")
        .with_failure_pattern("% Ambiguous command")
        .with_failure_pattern("% Unrecognized command")
        .with_failure_pattern("% Unknown command")
        .with_failure_pattern("% Bad mask")
        .with_failure_pattern("% Error")
}
