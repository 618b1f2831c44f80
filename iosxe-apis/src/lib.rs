//! # iosxe-apis
//!
//! Typed async wrappers that render Cisco IOS-XE configuration and apply it
//! through a device handle you already have.
//!
//! The crate does not open connections. Each operation builds an ordered
//! list of configuration lines, hands it to a [`Device`] and turns any
//! failure into a single [`Error::SubCommandFailure`] that names what was
//! being configured.
//!
//! ## Features
//!
//! - 802.1X / MAB / IBNS 2.0 identity configuration ([`iosxe::dot1x`])
//! - Spanning-tree global, MST and per-interface settings ([`iosxe::spanning_tree`])
//! - L2VPN storm control, VPLS and EVPN settings ([`iosxe::l2vpn`])
//! - Interface name canonicalization (`Gi1/0/1` to `GigabitEthernet1/0/1`)
//! - [`CheckedDevice`] adapter that fails on `% Invalid input` style output
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iosxe_apis::iosxe::spanning_tree::{self, PortfastOptions};
//! use iosxe_apis::{CheckedDevice, Device};
//!
//! async fn harden_edge(transport: impl Device) -> Result<(), iosxe_apis::Error> {
//!     let mut device = CheckedDevice::iosxe(transport);
//!
//!     spanning_tree::configure_spanning_tree_mode(&mut device, "rapid-pvst", None).await?;
//!     spanning_tree::configure_spanning_tree_portfast(
//!         &mut device,
//!         PortfastOptions { default: true, bpduguard: true, ..Default::default() },
//!     )
//!     .await?;
//!     spanning_tree::configure_spanning_tree_guard_root(&mut device, "Gi1/0/48").await?;
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod error;
pub mod interface;
pub mod iosxe;
pub mod platform;

// Re-export main types for convenience
pub use device::{CheckedDevice, ConfigLines, Device};
pub use error::{DeviceError, Error, Result};
pub use interface::canonical_interface_name;
pub use platform::PlatformDefinition;
