//! Cisco IOS-XE configuration wrappers.
//!
//! Every operation is an `async fn` generic over [`Device`](crate::Device):
//! it renders the configuration lines for one feature, sends them through
//! the device and reports failure as [`Error::SubCommandFailure`](crate::Error).

pub mod dot1x;
pub mod l2vpn;
pub mod spanning_tree;
