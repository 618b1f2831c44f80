//! Credential profiles, EAP profiles, supplicant and PAE settings.

use log::{debug, info};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::device::{ConfigLines, Device, apply};
use crate::error::Result;
use crate::interface::canonical_interface_name;

/// EAP method used when none is given.
pub const DEFAULT_EAP_METHOD: &str = "md5";

/// PAE role used when none is given.
pub const DEFAULT_PAE_MODE: &str = "both";

/// Encoding of the password in a `dot1x credentials` profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PasswordType {
    /// Type 7 (`password 7 <pw>`)
    Hidden,
    /// Type 0 (`password 0 <pw>`)
    Unencrypted,
}

impl PasswordType {
    fn code(self) -> &'static str {
        match self {
            Self::Hidden => "7",
            Self::Unencrypted => "0",
        }
    }
}

/// Attach a configured interface template to an interface.
pub async fn source_configured_template<D: Device>(
    device: &mut D,
    interface: &str,
    template_name: &str,
) -> Result<()> {
    let interface = canonical_interface_name(interface);
    info!("Assign template {} on {}", template_name, interface);

    let config = ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(format!("source template {template_name}"));
    let context = format!("Could not source a configured template {template_name}");
    apply(device, &config, &context).await
}

/// Detach an interface template from an interface.
pub async fn unconfigure_source_template<D: Device>(
    device: &mut D,
    interface: &str,
    template_name: &str,
) -> Result<()> {
    let interface = canonical_interface_name(interface);
    info!("Unconfigure source template {} on {}", template_name, interface);

    let config = ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(format!("no source template {template_name}"));
    let context = format!("Could not unconfigure the source template {template_name}");
    apply(device, &config, &context).await
}

/// Configure a `dot1x credentials` profile with a username and password.
///
/// The password is only exposed while rendering the `password` line.
pub async fn configure_dot1x_cred_profile<D: Device>(
    device: &mut D,
    profile_name: &str,
    user_name: &str,
    password: &SecretString,
    password_type: Option<PasswordType>,
) -> Result<()> {
    info!("configure dot1x credential");

    let password_line = match password_type {
        Some(kind) => format!("password {} {}", kind.code(), password.expose_secret()),
        None => format!("password {}", password.expose_secret()),
    };
    let config = ConfigLines::new()
        .line(format!("dot1x credentials {profile_name}"))
        .line(format!("username {user_name}"))
        .line(password_line);

    let context = format!("Could not configure dot1x credential profile {profile_name}");
    apply(device, &config, &context).await
}

/// Remove a `dot1x credentials` profile.
pub async fn unconfigure_dot1x_cred_profile<D: Device>(
    device: &mut D,
    profile_name: &str,
) -> Result<()> {
    info!("unconfigure dot1x credential");

    let config = ConfigLines::from(format!("no dot1x credentials {profile_name}"));
    let context = format!("Could not unconfigure dot1x credential profile {profile_name}");
    apply(device, &config, &context).await
}

/// Configure a `dot1x credentials` profile that authenticates with a PKI
/// trustpoint.
pub async fn configure_dot1x_cred_pki<D: Device>(
    device: &mut D,
    profile_name: &str,
    user_name: &str,
    pki_trustpoint: &str,
) -> Result<()> {
    info!("Configure dot1x credential with PKI");

    let config = ConfigLines::new()
        .line(format!("dot1x credentials {profile_name}"))
        .line(format!("username {user_name}"))
        .line(format!("pki-trustpoint {pki_trustpoint}"));
    let context = format!("Could not configure dot1x credential profile with PKI {profile_name}");
    apply(device, &config, &context).await
}

/// Configure an EAP profile with the given method.
///
/// Pass [`DEFAULT_EAP_METHOD`] for the usual MD5 profile.
pub async fn configure_eap_profile<D: Device>(
    device: &mut D,
    profile_name: &str,
    method: &str,
) -> Result<()> {
    debug!("Configure eap profile");

    let config = ConfigLines::new()
        .line(format!("eap profile {profile_name}"))
        .line(format!("method {method}"));
    let context = format!("Could not configure eap profile {profile_name}");
    apply(device, &config, &context).await
}

/// Configure an EAP profile using MD5.
pub async fn configure_eap_profile_md5<D: Device>(device: &mut D, profile_name: &str) -> Result<()> {
    info!("configure eap md5 profile");

    let config = ConfigLines::new()
        .line(format!("eap profile {profile_name}"))
        .line(format!("method {DEFAULT_EAP_METHOD}"));
    let context = format!("Could not configure eap md5 profile {profile_name}");
    apply(device, &config, &context).await
}

/// Remove an EAP profile.
pub async fn unconfigure_eap_profile<D: Device>(device: &mut D, profile_name: &str) -> Result<()> {
    info!("Unconfigure eap profile {}", profile_name);

    let config = ConfigLines::from(format!("no eap profile {profile_name}"));
    let context = format!("Could not unconfigure profile: {profile_name}");
    apply(device, &config, &context).await
}

/// Remove an MD5 EAP profile.
pub async fn unconfigure_eap_profile_md5<D: Device>(
    device: &mut D,
    profile_name: &str,
) -> Result<()> {
    info!("unconfigure eap md5 profile");

    let config = ConfigLines::from(format!("no eap profile {profile_name}"));
    let context = format!("Could not unconfigure eap md5 profile {profile_name}");
    apply(device, &config, &context).await
}

/// Make an interface a dot1x supplicant.
pub async fn configure_dot1x_supplicant<D: Device>(
    device: &mut D,
    interface: &str,
    cred_profile_name: Option<&str>,
    eap_profile: Option<&str>,
    auth_port_control: Option<&str>,
) -> Result<()> {
    let interface = canonical_interface_name(interface);
    info!("configure dot1x supplicant");

    let config = ConfigLines::new()
        .line(format!("interface {interface}"))
        .line("dot1x pae supplicant")
        .line_opt(non_empty(cred_profile_name), |c| format!("dot1x credentials {c}"))
        .line_opt(non_empty(eap_profile), |e| format!("dot1x supplicant eap profile {e}"))
        .line_opt(non_empty(auth_port_control), |pc| {
            format!("authentication port-control {pc}")
        });

    let context = format!("Failed to configure dot1x_supplicant on {interface}");
    apply(device, &config, &context).await
}

/// Remove a credential profile and the supplicant role from an interface.
pub async fn unconfigure_dot1x_supplicant<D: Device>(
    device: &mut D,
    profile_name: &str,
    interface: &str,
    eap_profile: Option<&str>,
) -> Result<()> {
    let config = ConfigLines::new()
        .line(format!("no dot1x credentials {profile_name}"))
        .line(format!("interface {interface}"))
        .line("no dot1x pae supplicant")
        .line_opt(non_empty(eap_profile), |e| {
            format!("no dot1x supplicant eap profile {e}")
        });

    let context = format!(
        "Could not unconfigure dot1x supplicant username {profile_name} on interface {interface}"
    );
    apply(device, &config, &context).await
}

fn cred_int_config(
    interface: &str,
    negate: bool,
    cred_profile_name: Option<&str>,
    eap_profile: Option<&str>,
    auth_profile: Option<&str>,
) -> ConfigLines {
    let no = if negate { "no " } else { "" };
    ConfigLines::new()
        .line(format!("interface {interface}"))
        .line_opt(non_empty(cred_profile_name), |c| {
            format!("{no}dot1x credentials {c}")
        })
        .line_opt(non_empty(eap_profile), |e| {
            format!("{no}dot1x supplicant eap profile {e}")
        })
        .line_opt(non_empty(auth_profile), |a| {
            format!("{no}dot1x authenticator eap profile {a}")
        })
}

/// Attach credential, supplicant EAP and authenticator EAP profiles to an
/// interface.
pub async fn configure_dot1x_cred_int<D: Device>(
    device: &mut D,
    interface: &str,
    cred_profile_name: Option<&str>,
    eap_profile: Option<&str>,
    auth_profile: Option<&str>,
) -> Result<()> {
    let interface = canonical_interface_name(interface);
    debug!("Configure dot1x credential on interface");

    let config = cred_int_config(&interface, false, cred_profile_name, eap_profile, auth_profile);
    let context = format!("Failed to configure credential on interface on {interface}");
    apply(device, &config, &context).await
}

/// Detach credential and EAP profiles from an interface.
pub async fn unconfigure_dot1x_cred_int<D: Device>(
    device: &mut D,
    interface: &str,
    cred_profile_name: Option<&str>,
    eap_profile: Option<&str>,
    auth_profile: Option<&str>,
) -> Result<()> {
    let interface = canonical_interface_name(interface);
    debug!("Unconfigure dot1x credential on interface");

    let config = cred_int_config(&interface, true, cred_profile_name, eap_profile, auth_profile);
    let context = format!("Failed to unconfigure credential on interface on {interface}");
    apply(device, &config, &context).await
}

/// Set the PAE role (`authenticator`, `supplicant` or `both`) on an interface.
pub async fn configure_dot1x_pae<D: Device>(device: &mut D, interface: &str, mode: &str) -> Result<()> {
    let config = ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(format!("dot1x pae {mode}"));
    apply(
        device,
        &config,
        "Failed configuring dot1x pae command on interface",
    )
    .await
}

/// Remove the PAE role from an interface.
pub async fn unconfigure_dot1x_pae<D: Device>(
    device: &mut D,
    interface: &str,
    mode: &str,
) -> Result<()> {
    let config = ConfigLines::new()
        .line(format!("interface {interface}"))
        .line(format!("no dot1x pae {mode}"));
    apply(
        device,
        &config,
        "Failed unconfiguring dot1x pae command on interface",
    )
    .await
}

/// Enable 802.1X port-based authentication globally.
pub async fn enable_dot1x_sysauthcontrol<D: Device>(device: &mut D) -> Result<()> {
    info!("Enables 802.1X port-based authentication");

    let config = ConfigLines::from("dot1x system-auth-control");
    apply(device, &config, "Failed to enable dot1x system auth-control").await
}

/// Disable 802.1X port-based authentication globally.
pub async fn disable_dot1x_sysauthcontrol<D: Device>(device: &mut D) -> Result<()> {
    info!("Disables 802.1X port-based authentication");

    let config = ConfigLines::from("no dot1x system-auth-control");
    apply(device, &config, "Failed to disable dot1x system auth-control").await
}

/// Remove `dot1x system-auth-control`.
pub async fn unconfigure_dot1x_system_auth_control<D: Device>(device: &mut D) -> Result<()> {
    let config = ConfigLines::from("no dot1x system-auth-control");
    apply(
        device,
        &config,
        "Unable to unconfigure dot1x system-auth-control",
    )
    .await
}
