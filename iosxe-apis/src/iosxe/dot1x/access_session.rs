//! Access-session (new style) settings, mode conversion and session clearing.

use log::{debug, info, warn};

use super::{CONVERT_TO_NEW_STYLE, CliStyle, detect_cli_style, non_empty};
use crate::device::{ConfigLines, Device, apply, run};
use crate::error::Result;
use crate::interface::canonical_interface_name;

/// Build `line`, prefixed with the forced conversion when the switch is
/// still in legacy mode.
async fn new_style_config<D: Device>(device: &mut D, line: String) -> Result<ConfigLines> {
    let mut config = ConfigLines::new();
    if detect_cli_style(device).await? == CliStyle::Legacy {
        info!("Switch is in legacy mode, converting to new-style");
        config.push(CONVERT_TO_NEW_STYLE);
    }
    config.push(line);
    Ok(config)
}

/// Convert the switch to new-style (eEdge) identity configuration.
///
/// Nothing is configured when the switch already runs new style.
pub async fn configure_mode_to_eedge<D: Device>(device: &mut D) -> Result<()> {
    match detect_cli_style(device).await? {
        CliStyle::Legacy => {
            info!("convert-to new-style");
            let config = ConfigLines::from(CONVERT_TO_NEW_STYLE);
            apply(
                device,
                &config,
                "Failed to Convert the configuration mode to eEdge monitor",
            )
            .await
        }
        CliStyle::New => {
            warn!(
                "{}: switch is already configured in new-style",
                device.name()
            );
            Ok(())
        }
    }
}

/// Enable autoconf, converting to new style first if needed.
pub async fn enable_autoconf<D: Device>(device: &mut D) -> Result<()> {
    let config = new_style_config(device, "autoconf enable".to_string()).await?;
    info!("Enable autoconf");
    apply(device, &config, "Failed to enable autoconf").await
}

/// Disable autoconf.
pub async fn unconfigure_autoconf<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("no autoconf enable");
    apply(
        device,
        &config,
        "Failed to unconfigure autoconf enable on this device",
    )
    .await
}

/// Enable access-session monitoring, converting to new style first if needed.
pub async fn configure_access_session_monitor<D: Device>(device: &mut D) -> Result<()> {
    let config = new_style_config(device, "access-session monitor".to_string()).await?;
    info!("Configure access-session monitor");
    apply(device, &config, "Failed to enable access-session monitor").await
}

/// Disable access-session monitoring.
pub async fn unconfigure_access_session_monitor<D: Device>(device: &mut D) -> Result<()> {
    info!("Unconfigure access-session monitor");
    let config = ConfigLines::from("no access-session monitor");
    apply(device, &config, "Failed to disable access-session monitor").await
}

/// Set the interface-template sticky timer (1-65535 seconds), converting to
/// new style first if needed.
pub async fn configure_access_session_sticky<D: Device>(device: &mut D, timer: u32) -> Result<()> {
    let config = new_style_config(
        device,
        format!("access-session interface-template sticky timer {timer}"),
    )
    .await?;
    info!("Configure interface-template sticky timer");

    let context = format!("Failed to configure access-session sticky timer {timer}");
    apply(device, &config, &context).await
}

/// Remove the interface-template sticky timer.
pub async fn unconfigure_access_session_sticky<D: Device>(
    device: &mut D,
    timer: u32,
) -> Result<()> {
    info!("Unconfigure interface-template sticky timer");

    let config = ConfigLines::from(format!(
        "no access-session interface-template sticky timer {timer}"
    ));
    let context = format!("Failed to unconfigure access-session sticky timer {timer}");
    apply(device, &config, &context).await
}

/// Clear access sessions, on one interface or everywhere.
///
/// An empty interface name clears every session.
pub async fn clear_access_session<D: Device>(device: &mut D, interface: Option<&str>) -> Result<()> {
    let command = match non_empty(interface) {
        Some(interface) => format!(
            "clear access-session interface {}",
            canonical_interface_name(interface)
        ),
        None => "clear access-session".to_string(),
    };
    run(device, &command, "Failed to execute clear access-session")
        .await
        .map(|_| ())
}

/// Clear the access session of one client MAC address.
pub async fn clear_access_session_mac<D: Device>(device: &mut D, mac: &str) -> Result<()> {
    debug!("Clearing Access session MAC");
    run(
        device,
        &format!("clear access-session mac {mac}"),
        "Failed to clear Access session MAC",
    )
    .await
    .map(|_| ())
}

/// Enable access-session event logging with session and event limits.
pub async fn configure_access_session_limit<D: Device>(
    device: &mut D,
    session_limit: u32,
    event_limit: u32,
) -> Result<()> {
    debug!("Configure Access session and event limit");
    let config = ConfigLines::from(format!(
        "access-session event-logging enable session-limit {session_limit} event-limit {event_limit}"
    ));
    apply(
        device,
        &config,
        "Could not configure Access session and event limit",
    )
    .await
}

/// Disable access-session event logging limits.
pub async fn unconfigure_access_session_limit<D: Device>(device: &mut D) -> Result<()> {
    debug!("Unconfigure Access session and event limit");
    let config = ConfigLines::from("no access-session event-logging enable session-limit");
    apply(
        device,
        &config,
        "Could not unconfigure Access session and event limit",
    )
    .await
}

/// Attach a control policy globally.
pub async fn configure_service_policy<D: Device>(device: &mut D, policy_name: &str) -> Result<()> {
    debug!("Configure Service policy");
    let config = ConfigLines::from(format!(
        "service-policy type control subscriber {policy_name}"
    ));
    apply(device, &config, "Could not configure Service policy").await
}

/// Detach the global control policy.
pub async fn unconfigure_service_policy<D: Device>(device: &mut D) -> Result<()> {
    debug!("Unconfigure Service policy");
    let config = ConfigLines::from("no service-policy type control subscriber");
    apply(device, &config, "Could not unconfigure Service policy").await
}
