//! Spanning-tree configuration.
//!
//! Global (`spanning-tree ...`), MST region and per-interface guard/filter
//! settings.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::device::{ConfigLines, Device, apply};
use crate::error::Result;

/// VLAN range used when the caller does not name one.
pub const DEFAULT_VLAN_RANGE: &str = "1-4093";

/// Root bridge role for `spanning-tree vlan <range> root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootRole {
    Primary,
    Secondary,
}

impl fmt::Display for RootRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

/// Flags for the global `spanning-tree portfast` command.
///
/// Only one suffix is rendered. `bpduguard` wins over `bpdufilter`, which
/// wins over a bare `default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfastOptions {
    pub default: bool,
    pub bpduguard: bool,
    pub bpdufilter: bool,
}

impl PortfastOptions {
    fn command(&self) -> String {
        let suffix = if self.bpduguard {
            if self.default {
                Some("bpduguard default")
            } else {
                Some("bpduguard")
            }
        } else if self.bpdufilter {
            Some("bpdufilter default")
        } else if self.default {
            Some("default")
        } else {
            None
        };

        match suffix {
            Some(suffix) => format!("spanning-tree portfast {suffix}"),
            None => "spanning-tree portfast".to_string(),
        }
    }
}

/// Target of a `default spanning-tree ...` reset.
///
/// Keywords whose default form needs a fixed sub-keyword render it; the
/// variants carrying a value append it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultSpanningTree {
    Bridge,
    Etherchannel,
    Extend,
    /// MST instance range, e.g. `0-3,5,7-9`
    Mst(String),
    Pathcost,
    /// Portfast sub-option, e.g. `bpduguard default`
    Portfast(String),
    Sso,
    Transmit,
    Uplinkfast,
    /// VLAN range, e.g. `1,3-5,7,9-11`
    Vlan(String),
    /// Any other keyword, rendered as `default spanning-tree <keyword>`
    Other(String),
}

impl DefaultSpanningTree {
    fn command(&self) -> String {
        let tail = match self {
            Self::Bridge => "bridge assurance".to_string(),
            Self::Etherchannel => "etherchannel guard misconfig".to_string(),
            Self::Extend => "extend system-id".to_string(),
            Self::Mst(range) => format!("mst {range}"),
            Self::Pathcost => "pathcost method".to_string(),
            Self::Portfast(option) => format!("portfast {option}"),
            Self::Sso => "sso block-tcn".to_string(),
            Self::Transmit => "transmit hold-count".to_string(),
            Self::Uplinkfast => "uplinkfast max-update-rate".to_string(),
            Self::Vlan(range) => format!("vlan {range}"),
            Self::Other(keyword) => keyword.clone(),
        };
        format!("default spanning-tree {}", tail.trim_end())
    }
}

/// Configure `spanning-tree vlan <vlan_range>`.
pub async fn configure_spanning_tree<D: Device>(device: &mut D, vlan_range: &str) -> Result<()> {
    let config = ConfigLines::from(format!("spanning-tree vlan {vlan_range}"));
    apply(device, &config, "Could not configure spanning tree").await
}

/// Remove `spanning-tree vlan <vlan_range>`.
pub async fn unconfigure_spanning_tree<D: Device>(device: &mut D, vlan_range: &str) -> Result<()> {
    let config = ConfigLines::from(format!("no spanning-tree vlan {vlan_range}"));
    apply(device, &config, "Could not unconfigure spanning tree").await
}

/// Configure the bridge priority for a VLAN.
pub async fn configure_spanning_tree_priority<D: Device>(
    device: &mut D,
    vlan: &str,
    priority: u32,
) -> Result<()> {
    let config = ConfigLines::from(format!("spanning-tree vlan {vlan} priority {priority}"));
    apply(
        device,
        &config,
        "Could not configure spanning tree with priority",
    )
    .await
}

/// Remove the bridge priority for a VLAN.
///
/// Without `priority` the whole `priority` setting is removed.
pub async fn unconfigure_spanning_tree_priority<D: Device>(
    device: &mut D,
    vlan: &str,
    priority: Option<u32>,
) -> Result<()> {
    let command = match priority {
        Some(priority) => format!("no spanning-tree vlan {vlan} priority {priority}"),
        None => format!("no spanning-tree vlan {vlan} priority"),
    };
    apply(
        device,
        &ConfigLines::from(command),
        "Could not unconfigure spanning tree with priority",
    )
    .await
}

/// Configure the spanning-tree mode, optionally with a system-id option.
///
/// `system_id` is rendered as `spanning-tree <system_id>`, e.g.
/// `extend system-id`.
pub async fn configure_spanning_tree_mode<D: Device>(
    device: &mut D,
    mode: &str,
    system_id: Option<&str>,
) -> Result<()> {
    let config = ConfigLines::new()
        .line(format!("spanning-tree mode {mode}"))
        .line_opt(system_id, |id| format!("spanning-tree {id}"));
    apply(device, &config, "Could not configure spanning tree mode").await
}

/// Remove the spanning-tree mode.
pub async fn unconfigure_spanning_tree_mode<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("no spanning-tree mode");
    apply(device, &config, "Could not unconfigure spanning tree mode").await
}

/// Map VLANs to an MST instance.
pub async fn configure_spanning_tree_mst_configuration<D: Device>(
    device: &mut D,
    instance: u16,
    vlan_id: u16,
    mapped_vlan_id: Option<u16>,
) -> Result<()> {
    info!(
        "Configuring the spanning tree mst configuration on {}",
        device.name()
    );

    let mapping = match mapped_vlan_id {
        Some(mapped) => format!("instance {instance} vlan {vlan_id}, {mapped}"),
        None => format!("instance {instance} vlan {vlan_id}"),
    };
    let config = ConfigLines::new()
        .line("spanning-tree mst configuration")
        .line(mapping);

    let context = format!(
        "Could not configure the spanning tree mst configuration on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

/// Remove the MST region configuration.
pub async fn unconfigure_spanning_tree_mst_configuration<D: Device>(device: &mut D) -> Result<()> {
    info!(
        "Unconfiguring the spanning tree mst configuration on {}",
        device.name()
    );

    let config = ConfigLines::from("no spanning-tree mst configuration");
    let context = format!(
        "Could not unconfigure the spanning tree mst configuration on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

/// Set the MST region name.
pub async fn configure_spanning_tree_mst_configuration_name<D: Device>(
    device: &mut D,
    name: &str,
) -> Result<()> {
    info!("Configuring the spanning tree mst configuration name");

    let config = ConfigLines::new()
        .line("spanning-tree mst configuration")
        .line(format!("name {name}"));
    let context = format!(
        "Could not configure the spanning tree mst configuration name on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

/// Set the MST region revision number.
pub async fn configure_spanning_tree_mst_configuration_revision<D: Device>(
    device: &mut D,
    revision: u16,
) -> Result<()> {
    info!("Configuring the spanning tree mst configuration revision");

    let config = ConfigLines::new()
        .line("spanning-tree mst configuration")
        .line(format!("revision {revision}"));
    let context = format!(
        "Could not configure the spanning tree mst configuration revision on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

fn interface_config(interface: &str, command: &str) -> ConfigLines {
    ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(command)
}

/// Enable loop guard on an interface.
pub async fn configure_spanning_tree_guard_loop<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "spanning-tree guard loop");
    apply(device, &config, "Could not enable the spanning-tree guard loop").await
}

/// Disable loop guard on an interface.
pub async fn unconfigure_spanning_tree_guard_loop<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "no spanning-tree guard loop");
    apply(device, &config, "Could not disable the spanning-tree guard loop").await
}

/// Enable root guard on an interface.
pub async fn configure_spanning_tree_guard_root<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "spanning-tree guard root");
    apply(device, &config, "Could not enable the spanning-tree guard root").await
}

/// Disable root guard on an interface.
pub async fn unconfigure_spanning_tree_guard_root<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "no spanning-tree guard root");
    apply(device, &config, "Could not disable the spanning-tree guard root").await
}

/// Enable BPDU filter on an interface.
pub async fn configure_spanning_tree_bpdufilter<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "spanning-tree bpdufilter enable");
    apply(device, &config, "Could not enable the spanning-tree bpdufilter").await
}

/// Explicitly disable BPDU filter on an interface.
pub async fn configure_spanning_tree_bpdufilter_disable<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "spanning-tree bpdufilter disable");
    apply(device, &config, "Could not disable the spanning-tree bpdufilter").await
}

/// Remove the BPDU filter setting from an interface.
pub async fn unconfigure_spanning_tree_bpdufilter<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "no spanning-tree bpdufilter");
    apply(device, &config, "Could not disable the spanning-tree bpdufilter").await
}

/// Enable or disable BPDU guard on an interface.
pub async fn configure_spanning_tree_bpduguard<D: Device>(
    device: &mut D,
    interface: &str,
    enable: bool,
) -> Result<()> {
    let option = if enable { "enable" } else { "disable" };
    let config = interface_config(interface, &format!("spanning-tree bpduguard {option}"));
    apply(
        device,
        &config,
        &format!("Could not {option} the spanning-tree bpduguard"),
    )
    .await
}

/// Configure global portfast.
pub async fn configure_spanning_tree_portfast<D: Device>(
    device: &mut D,
    options: PortfastOptions,
) -> Result<()> {
    let config = ConfigLines::from(options.command());
    apply(device, &config, "Could not configure spanning-tree portfast").await
}

/// Remove global portfast.
pub async fn unconfigure_spanning_tree_portfast<D: Device>(
    device: &mut D,
    options: PortfastOptions,
) -> Result<()> {
    let config = ConfigLines::from(format!("no {}", options.command()));
    apply(device, &config, "Could not unconfigure spanning-tree portfast").await
}

/// Enable portfast on all access ports by default.
pub async fn configure_spanning_tree_portfast_default<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("spanning-tree portfast default");
    apply(
        device,
        &config,
        "Could not configure spanning-tree portfast default",
    )
    .await
}

/// Enable uplinkfast, optionally with a max update rate (0-32000).
pub async fn configure_spanning_tree_uplinkfast<D: Device>(
    device: &mut D,
    max_rate: Option<u32>,
) -> Result<()> {
    let command = match max_rate {
        Some(rate) => format!("spanning-tree uplinkfast max-update-rate {rate}"),
        None => "spanning-tree uplinkfast".to_string(),
    };
    apply(
        device,
        &ConfigLines::from(command),
        "Could not configure spanning-tree uplinkfast",
    )
    .await
}

/// Disable uplinkfast, or only reset its max update rate when `max_rate` is set.
pub async fn unconfigure_spanning_tree_uplinkfast<D: Device>(
    device: &mut D,
    max_rate: bool,
) -> Result<()> {
    let command = if max_rate {
        "no spanning-tree uplinkfast max-update-rate"
    } else {
        "no spanning-tree uplinkfast"
    };
    apply(
        device,
        &ConfigLines::from(command),
        "Could not unconfigure spanning-tree uplinkfast",
    )
    .await
}

/// Enable backbonefast.
pub async fn configure_spanning_tree_backbonefast<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("spanning-tree backbonefast");
    apply(device, &config, "Could not configure spanning-tree backbonefast").await
}

/// Disable backbonefast.
pub async fn unconfigure_spanning_tree_backbonefast<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("no spanning-tree backbonefast");
    apply(
        device,
        &config,
        "Could not unconfigure spanning-tree backbonefast",
    )
    .await
}

/// Make this bridge the primary or secondary root for a VLAN range.
pub async fn configure_spanning_tree_vlan_root<D: Device>(
    device: &mut D,
    vlan_range: &str,
    role: RootRole,
    diameter: Option<u8>,
) -> Result<()> {
    let command = match diameter {
        Some(diameter) => {
            format!("spanning-tree vlan {vlan_range} root {role} diameter {diameter}")
        }
        None => format!("spanning-tree vlan {vlan_range} root {role}"),
    };
    apply(
        device,
        &ConfigLines::from(command),
        "Could not configure spanning tree vlan root",
    )
    .await
}

/// Remove the root setting for a VLAN range.
pub async fn unconfigure_spanning_tree_vlan_root<D: Device>(
    device: &mut D,
    vlan_range: &str,
) -> Result<()> {
    let config = ConfigLines::from(format!("no spanning-tree vlan {vlan_range} root"));
    apply(device, &config, "Could not unconfigure spanning tree vlan root").await
}

/// Reset a spanning-tree setting to its default.
pub async fn configure_default_spanning_tree<D: Device>(
    device: &mut D,
    target: &DefaultSpanningTree,
) -> Result<()> {
    let config = ConfigLines::from(target.command());
    apply(
        device,
        &config,
        "Failed to configure default spanning-tree on device",
    )
    .await
}

/// Block topology change notifications during SSO switchover.
pub async fn configure_spanningtree_sso_block_tcn<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("spanning-tree sso block-tcn");
    let context = format!(
        "Could not configure spanning-tree sso block-tcn on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

/// Remove `spanning-tree sso block-tcn`.
pub async fn unconfigure_spanningtree_sso_block_tcn<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("no spanning-tree sso block-tcn");
    let context = format!(
        "Could not unconfigure spanning-tree sso block-tcn on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

/// Set the port path cost (1-200000000) on an interface.
pub async fn configure_spanningtree_cost_on_interface<D: Device>(
    device: &mut D,
    interface: &str,
    path_cost: u32,
) -> Result<()> {
    let config = interface_config(interface, &format!("spanning-tree cost {path_cost}"));
    let context = format!("Could not configure spanning-tree cost on {}", device.name());
    apply(device, &config, &context).await
}

/// Remove the port path cost from an interface.
pub async fn unconfigure_spanningtree_cost_on_interface<D: Device>(
    device: &mut D,
    interface: &str,
    path_cost: u32,
) -> Result<()> {
    let config = interface_config(interface, &format!("no spanning-tree cost {path_cost}"));
    let context = format!(
        "Could not unconfigure spanning-tree cost on {}",
        device.name()
    );
    apply(device, &config, &context).await
}
