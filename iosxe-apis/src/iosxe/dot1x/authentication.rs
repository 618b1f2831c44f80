//! Per-interface authentication settings and IBNS 2.0 port identity.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use super::CliStyle;
use crate::device::{ConfigLines, Device, apply};
use crate::error::Result;
use crate::interface::canonical_interface_name;

/// Host mode that IBNS 2.0 uses when none is configured.
const DEFAULT_HOST_MODE: &str = "multi-auth";

fn interface_config(interface: &str, command: String) -> ConfigLines {
    ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(command)
}

/// Configure the authentication host mode on an interface.
pub async fn configure_authentication_host_mode<D: Device>(
    device: &mut D,
    mode: &str,
    interface: &str,
    style: CliStyle,
) -> Result<()> {
    let config = interface_config(interface, format!("{} host-mode {mode}", style.keyword()));
    apply(device, &config, "Unable to configure host-mode").await
}

/// Remove the authentication host mode from an interface.
pub async fn unconfigure_authentication_host_mode<D: Device>(
    device: &mut D,
    mode: &str,
    interface: &str,
    style: CliStyle,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("no {} host-mode {mode}", style.keyword()),
    );
    apply(device, &config, "Unable to unconfigure host-mode").await
}

/// Set the method order, e.g. `dot1x mab`.
pub async fn configure_authentication_order<D: Device>(
    device: &mut D,
    order: &str,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, format!("authentication order {order}"));
    apply(device, &config, "Unable to configure authentication order").await
}

/// Remove the method order.
pub async fn unconfigure_authentication_order<D: Device>(
    device: &mut D,
    order: &str,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, format!("no authentication order {order}"));
    apply(device, &config, "Unable to unconfigure authentication order").await
}

/// Set the method priority, e.g. `dot1x mab`.
pub async fn configure_authentication_priority<D: Device>(
    device: &mut D,
    priority: &str,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, format!("authentication priority {priority}"));
    apply(device, &config, "Unable to configure authentication priority").await
}

/// Remove the method priority.
pub async fn unconfigure_authentication_priority<D: Device>(
    device: &mut D,
    priority: &str,
    interface: &str,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("no authentication priority {priority}"),
    );
    apply(
        device,
        &config,
        "Unable to unconfigure authentication priority",
    )
    .await
}

/// Set port control (`auto`, `force-authorized`, `force-unauthorized`).
pub async fn configure_authentication_port_control<D: Device>(
    device: &mut D,
    control: &str,
    interface: &str,
    style: CliStyle,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("{} port-control {control}", style.keyword()),
    );
    apply(
        device,
        &config,
        "Unable to configure authentication port-control",
    )
    .await
}

/// Remove port control from an interface.
pub async fn unconfigure_authentication_port_control<D: Device>(
    device: &mut D,
    control: &str,
    interface: &str,
    style: CliStyle,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("no {} port-control {control}", style.keyword()),
    );
    apply(
        device,
        &config,
        "Unable to unconfigure authentication port-control",
    )
    .await
}

/// Enable periodic reauthentication.
pub async fn configure_authentication_periodic<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "authentication periodic".to_string());
    apply(device, &config, "Unable to configure authentication periodic").await
}

/// Disable periodic reauthentication.
pub async fn unconfigure_authentication_periodic<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "no authentication periodic".to_string());
    apply(
        device,
        &config,
        "Unable to unconfigure authentication periodic",
    )
    .await
}

/// Set the reauthentication timer to seconds or `server`.
pub async fn configure_authentication_timer_reauth<D: Device>(
    device: &mut D,
    value: &str,
    interface: &str,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("authentication timer reauthenticate {value}"),
    );
    apply(
        device,
        &config,
        "Unable to configure authentication timer reauthenticate",
    )
    .await
}

/// Remove the reauthentication timer.
pub async fn unconfigure_authentication_timer_reauth<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(
        interface,
        "no authentication timer reauthenticate".to_string(),
    );
    apply(
        device,
        &config,
        "Unable to unconfigure authentication timer reauthenticate",
    )
    .await
}

/// Authentication method enabled on an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// `dot1x pae authenticator`
    Dot1x,
    /// `mab`
    Mab,
    /// Any other interface command, sent verbatim
    Other(String),
}

impl AuthMethod {
    fn command(&self) -> &str {
        match self {
            Self::Dot1x => "dot1x pae authenticator",
            Self::Mab => "mab",
            Self::Other(command) => command,
        }
    }
}

/// Enable an authentication method on an interface.
pub async fn configure_auth_method<D: Device>(
    device: &mut D,
    method: &AuthMethod,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, method.command().to_string());
    apply(device, &config, "Failed configuring authentication method").await
}

/// Disable an authentication method on an interface.
pub async fn unconfigure_auth_method<D: Device>(
    device: &mut D,
    method: &AuthMethod,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, format!("no {}", method.command()));
    apply(device, &config, "Failed unconfiguring authentication method").await
}

/// Control traffic direction (`both` or `in`) for unauthorized ports.
pub async fn configure_authentication_control_direction<D: Device>(
    device: &mut D,
    interface: &str,
    direction: &str,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("authentication control-direction {direction}"),
    );
    apply(
        device,
        &config,
        "Failed to configure authentication control-direction",
    )
    .await
}

/// Remove the control direction setting.
pub async fn unconfigure_authentication_control_direction<D: Device>(
    device: &mut D,
    interface: &str,
    direction: &str,
) -> Result<()> {
    let config = interface_config(
        interface,
        format!("no authentication control-direction {direction}"),
    );
    apply(
        device,
        &config,
        "Failed to unconfigure authentication control-direction",
    )
    .await
}

/// Enable open access on an interface.
pub async fn configure_authentication_open<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "authentication open".to_string());
    apply(device, &config, "Failed to configure authentication open").await
}

/// Disable open access on an interface.
pub async fn unconfigure_authentication_open<D: Device>(
    device: &mut D,
    interface: &str,
) -> Result<()> {
    let config = interface_config(interface, "no authentication open".to_string());
    apply(device, &config, "Failed to unconfigure authentication open").await
}

/// Where an IBNS 2.0 port identity is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IbnsTarget {
    /// A physical interface; the name is canonicalized.
    Interface(String),
    /// An interface template.
    Template(String),
}

/// Switchport mode for an IBNS 2.0 port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchportMode {
    #[default]
    Access,
    Trunk,
}

impl fmt::Display for SwitchportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => f.write_str("access"),
            Self::Trunk => f.write_str("trunk"),
        }
    }
}

/// Reauthentication timer for IBNS ports.
///
/// Deserializes from a number of seconds (1-65535) or the keyword `server`
/// in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReauthValue", into = "ReauthValue")]
pub enum ReauthTimer {
    Seconds(u32),
    /// Use the Session-Timeout sent by the RADIUS server.
    Server,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ReauthValue {
    Seconds(u32),
    Keyword(String),
}

impl TryFrom<ReauthValue> for ReauthTimer {
    type Error = String;

    fn try_from(value: ReauthValue) -> std::result::Result<Self, Self::Error> {
        match value {
            ReauthValue::Seconds(secs) => Ok(Self::Seconds(secs)),
            ReauthValue::Keyword(keyword) if keyword.eq_ignore_ascii_case("server") => {
                Ok(Self::Server)
            }
            ReauthValue::Keyword(other) => Err(format!(
                "invalid reauthentication timer '{other}', expected seconds or 'server'"
            )),
        }
    }
}

impl From<ReauthTimer> for ReauthValue {
    fn from(timer: ReauthTimer) -> Self {
        match timer {
            ReauthTimer::Seconds(secs) => Self::Seconds(secs),
            ReauthTimer::Server => Self::Keyword("server".to_string()),
        }
    }
}

impl fmt::Display for ReauthTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{secs}"),
            Self::Server => f.write_str("server"),
        }
    }
}

/// Optional settings for [`config_identity_ibns`].
///
/// Field aliases accept the short keys used by existing inventories
/// (`txp`, `txp_sup`, `authmod`, `ctr`). Unknown keys are rejected. String
/// values are lower-cased when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IbnsOptions {
    pub data_vlan: Option<u16>,
    pub voice_vlan: Option<u16>,
    pub max_req: Option<u32>,
    pub max_reauth_req: Option<u32>,
    #[serde(alias = "txp")]
    pub tx_period: Option<u32>,
    #[serde(alias = "txp_sup")]
    pub supp_timeout: Option<u32>,
    /// Rendered only when different from `multi-auth`.
    #[serde(alias = "authmod")]
    pub host_mode: Option<String>,
    /// Emit `access-session closed`.
    pub closed: bool,
    /// `Some(false)` also closes the port; `open` is the access-session default.
    pub open: Option<bool>,
    #[serde(alias = "ctr")]
    pub control_direction: Option<String>,
    pub reauth: Option<ReauthTimer>,
}

impl IbnsOptions {
    fn render(&self, config: &mut ConfigLines) {
        if let Some(vlan) = self.data_vlan {
            config.push(format!("switchport access vlan {vlan}"));
        }
        if let Some(vlan) = self.voice_vlan {
            config.push(format!("switchport voice vlan {vlan}"));
        }
        if let Some(count) = self.max_req {
            config.push(format!("dot1x max-req {count}"));
        }
        if let Some(count) = self.max_reauth_req {
            config.push(format!("dot1x max-reauth-req {count}"));
        }
        if let Some(secs) = self.tx_period {
            config.push(format!("dot1x timeout tx-period {secs}"));
        }
        if let Some(secs) = self.supp_timeout {
            config.push(format!("dot1x timeout supp-timeout {secs}"));
        }

        let host_mode = self
            .host_mode
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_HOST_MODE.to_string());
        if host_mode != DEFAULT_HOST_MODE {
            config.push(format!("access-session host-mode {host_mode}"));
        }

        if self.closed || self.open == Some(false) {
            config.push("access-session closed");
        }
        if let Some(direction) = &self.control_direction {
            config.push(format!(
                "access-session control-direction {}",
                direction.to_lowercase()
            ));
        }
        if let Some(reauth) = self.reauth {
            config.push(format!("authentication timer reauthenticate {reauth}"));
        }
    }
}

/// Configure IBNS 2.0 port identity and attach a control policy.
///
/// Physical interfaces also get a bare `switchport` line before the mode;
/// templates do not.
pub async fn config_identity_ibns<D: Device>(
    device: &mut D,
    policy_map: &str,
    target: &IbnsTarget,
    mode: SwitchportMode,
    port_control: &str,
    options: &IbnsOptions,
) -> Result<()> {
    let (mut config, name) = match target {
        IbnsTarget::Interface(interface) => {
            let interface = canonical_interface_name(interface);
            let config = ConfigLines::new()
                .line(format!("interface {interface}"))
                .line("switchport");
            (config, interface)
        }
        IbnsTarget::Template(template) => (
            ConfigLines::new().line(format!("template {template}")),
            template.clone(),
        ),
    };
    info!("Configuring IBNS 2.0 identity on {}", name);

    config.push(format!("switchport mode {mode}"));
    config.push(format!("access-session port-control {port_control}"));
    config.push("authentication periodic");
    config.push("mab");
    config.push("dot1x pae authenticator");
    options.render(&mut config);
    config.push(format!(
        "service-policy type control subscriber {policy_map}"
    ));

    let context = format!("Failed to configure 802.1x port based Authentication on {name}");
    apply(device, &config, &context).await
}
