//! L2VPN configuration: service instance storm control, VPLS VFI context
//! and EVPN flooding suppression.

use log::info;
use serde::{Deserialize, Serialize};

use crate::device::{ConfigLines, Device, apply};
use crate::error::Result;

/// One `storm-control` entry under an Ethernet service instance.
///
/// Renders as `storm-control <traffic_flow> <name> <val>`, e.g.
/// `storm-control unicast cir 8000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormControl {
    /// `unicast`, `broadcast` or `multicast`
    pub traffic_flow: String,
    /// Threshold kind, e.g. `cir`
    pub name: String,
    pub val: f64,
}

impl StormControl {
    pub fn new(traffic_flow: impl Into<String>, name: impl Into<String>, val: f64) -> Self {
        Self {
            traffic_flow: traffic_flow.into(),
            name: name.into(),
            val,
        }
    }

    fn command(&self) -> String {
        format!(
            "storm-control {} {} {}",
            self.traffic_flow, self.name, self.val
        )
    }
}

/// Configure storm control under a service instance.
pub async fn configure_l2vpn_storm_control<D: Device>(
    device: &mut D,
    interface: &str,
    service_instance_id: u32,
    storm_control: &[StormControl],
) -> Result<()> {
    info!(
        "Configuring storm control under service instance: {} and interface: {}",
        service_instance_id, interface
    );

    let config = ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(format!("service instance {service_instance_id} ethernet"))
        .lines(storm_control.iter().map(StormControl::command));

    let context = format!(
        "Configuration failed for storm control under service instance: {} and interface: {}",
        service_instance_id, interface
    );
    apply(device, &config, &context).await
}

/// Configure `l2vpn vfi context vpls` with its VPN id and pseudowire members.
pub async fn configure_l2vpn_vfi_context_vpls<D: Device>(
    device: &mut D,
    vpn_id: &str,
    members: &[&str],
    auto_bgp: bool,
) -> Result<()> {
    info!("Configuring l2vpn vfi context vpls on {}", device.name());

    let config = ConfigLines::new()
        .line("l2vpn vfi context vpls")
        .line(format!("vpn id {vpn_id}"))
        .lines(members.iter().map(|member| format!("member {member}")))
        .line_if(auto_bgp, || "autodiscovery bgp signaling ldp".to_string());

    let context = format!(
        "Configuration failed for l2vpn vfi vpls on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

/// Remove `l2vpn vfi context vpls`.
pub async fn unconfigure_l2vpn_vfi_context_vpls<D: Device>(device: &mut D) -> Result<()> {
    info!("Unconfiguring l2vpn vfi context vpls on {}", device.name());

    let config = ConfigLines::from("no l2vpn vfi context vpls");
    let context = format!(
        "Configuration removal failed for l2vpn vfi vpls on {}",
        device.name()
    );
    apply(device, &config, &context).await
}

fn flood_suppression(instance: u32, enable: bool) -> ConfigLines {
    let command = "flooding-suppression address-resolution disable";
    ConfigLines::new()
        .line(format!("l2vpn evpn instance {instance} vlan-based"))
        .line("encapsulation vxlan")
        .line(if enable {
            command.to_string()
        } else {
            format!("no {command}")
        })
}

/// Disable address-resolution flooding suppression for a VLAN-based EVPN
/// instance.
pub async fn configure_evpn_instance_vlan_based_flood_suppression<D: Device>(
    device: &mut D,
    instance: u32,
) -> Result<()> {
    let context = format!(
        "Configuration failed for flooding-suppression address-resolution disable of instance: {instance}"
    );
    apply(device, &flood_suppression(instance, true), &context).await
}

/// Restore address-resolution flooding suppression for a VLAN-based EVPN
/// instance.
pub async fn unconfigure_evpn_instance_vlan_based_flood_suppression<D: Device>(
    device: &mut D,
    instance: u32,
) -> Result<()> {
    let context = format!(
        "Failed to un-configure flooding-suppression address-resolution disable of instance: {instance}"
    );
    apply(device, &flood_suppression(instance, false), &context).await
}
