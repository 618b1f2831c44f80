//! Built-in vendor platforms.

pub mod cisco_iosxe;
