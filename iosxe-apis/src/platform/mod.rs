//! Platform definitions.
//!
//! A platform describes how a vendor CLI reports rejected commands in its
//! output. Only Cisco IOS-XE ships built in.

mod definition;
pub mod vendors;

pub use definition::PlatformDefinition;
