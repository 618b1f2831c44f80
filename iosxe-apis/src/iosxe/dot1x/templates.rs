//! Interface templates, service templates, subscriber class maps and
//! parameter maps.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::non_empty;
use crate::device::{ConfigLines, Device, apply};
use crate::error::Result;

/// Configure an interface template with the usual closed-mode dot1x/MAB
/// method set and a control policy.
pub async fn configure_template_methods_for_dot1x<D: Device>(
    device: &mut D,
    template_name: &str,
    vlan_id: u16,
    voice_vlan_id: u16,
    policy_map_name: &str,
) -> Result<()> {
    info!("Configuring template methods for dot1x");

    let config = ConfigLines::new()
        .line(format!("template {template_name}"))
        .line("dot1x pae authenticator")
        .line(format!("switchport access vlan {vlan_id}"))
        .line("switchport mode access")
        .line(format!("switchport voice vlan {voice_vlan_id}"))
        .line("mab")
        .line("access-session closed")
        .line("access-session port-control auto")
        .line("authentication periodic")
        .line("authentication timer reauthenticate server")
        .line(format!(
            "service-policy type control subscriber {policy_map_name}"
        ));
    apply(device, &config, "Could not configure template methods for dot1x").await
}

/// Set the tx-period and max reauth request count (1-10) on a template.
pub async fn configure_template_methods_using_max_reauth<D: Device>(
    device: &mut D,
    template_name: &str,
    timeout_period: u32,
    max_reauth: u8,
) -> Result<()> {
    info!("Configuring template methods using max reauth");

    let config = ConfigLines::new()
        .line(format!("template {template_name}"))
        .line(format!("dot1x timeout tx-period {timeout_period}"))
        .line(format!("dot1x max-reauth-req {max_reauth}"));
    apply(
        device,
        &config,
        "Could not configure template methods using max reauth and timeout",
    )
    .await
}

/// Remove an interface template.
pub async fn unconfigure_dot1x_template<D: Device>(device: &mut D, template_name: &str) -> Result<()> {
    let config = ConfigLines::from(format!("no template {template_name}"));
    let context = format!("Could not unconfigure template {template_name}");
    apply(device, &config, &context).await
}

fn service_template(template_name: &str, setting: String) -> ConfigLines {
    ConfigLines::new()
        .line(format!("service-template {template_name}"))
        .line(setting)
}

/// Configure a service template with a linksec policy.
pub async fn configure_service_template_linksec<D: Device>(
    device: &mut D,
    template: &str,
    session_type: &str,
) -> Result<()> {
    debug!("Configure Service template with link security");
    let config = service_template(template, format!("linksec policy {session_type}"));
    apply(
        device,
        &config,
        "Could not configure Service template with link security",
    )
    .await
}

/// Remove a service template.
pub async fn unconfigure_service_template<D: Device>(device: &mut D, template: &str) -> Result<()> {
    debug!("Unconfigure Service template");
    let config = ConfigLines::from(format!("no service-template {template}"));
    apply(device, &config, "Could not unconfigure Service template").await
}

/// Configure a service template granting the voice VLAN.
pub async fn configure_service_template_voice<D: Device>(device: &mut D, template: &str) -> Result<()> {
    debug!("Configure Service template with voice");
    let config = service_template(template, "voice vlan".to_string());
    apply(
        device,
        &config,
        "Could not configure Service template with voice",
    )
    .await
}

/// Set an inactivity timer on a service template, optionally probing the
/// client before expiry.
pub async fn configure_service_template_with_inactivity_timer<D: Device>(
    device: &mut D,
    template_name: &str,
    timer: u32,
    probe: bool,
) -> Result<()> {
    info!("Configuring service template with inactivity timer");
    let setting = if probe {
        format!("inactivity-timer {timer} probe")
    } else {
        format!("inactivity-timer {timer}")
    };
    let config = service_template(template_name, setting);
    apply(
        device,
        &config,
        "Could not configure service template with inactivity timer",
    )
    .await
}

/// Assign a VLAN from a service template.
pub async fn configure_service_template_with_vlan<D: Device>(
    device: &mut D,
    template_name: &str,
    vlan_id: u16,
) -> Result<()> {
    info!("Configuring service template with vlan");
    let config = service_template(template_name, format!("vlan {vlan_id}"));
    apply(
        device,
        &config,
        "Could not configure service template with vlan",
    )
    .await
}

/// Apply an access group from a service template.
pub async fn configure_service_template_with_access_group<D: Device>(
    device: &mut D,
    template_name: &str,
    access_group: &str,
) -> Result<()> {
    info!("Configuring service template with access group");
    let config = service_template(template_name, format!("access-group {access_group}"));
    apply(
        device,
        &config,
        "Could not configure service template with access group",
    )
    .await
}

/// Set an absolute session timer on a service template.
pub async fn configure_service_template_with_absolute_timer<D: Device>(
    device: &mut D,
    template_name: &str,
    timer: u32,
) -> Result<()> {
    info!("Configuring service template with absolute timer");
    let config = service_template(template_name, format!("absolute-timer {timer}"));
    apply(
        device,
        &config,
        "Could not configure service template with absolute timer",
    )
    .await
}

/// Set a service template description.
pub async fn configure_service_template_with_description<D: Device>(
    device: &mut D,
    template_name: &str,
    description: &str,
) -> Result<()> {
    info!("Configuring service template with description");
    let config = service_template(template_name, format!("description {description}"));
    apply(
        device,
        &config,
        "Could not configure service template with description",
    )
    .await
}

/// Configure a redirect URL, optionally restricted to an ACL match.
///
/// `redirect_option` (e.g. `one-time-redirect`) is only rendered together
/// with an ACL.
pub async fn configure_service_template_with_redirect_url<D: Device>(
    device: &mut D,
    template_name: &str,
    url: &str,
    acl_name: Option<&str>,
    redirect_option: Option<&str>,
) -> Result<()> {
    info!("Configuring service template with redirect url");
    let setting = match (non_empty(acl_name), non_empty(redirect_option)) {
        (Some(acl), Some(option)) => format!("redirect url {url} match {acl} {option}"),
        (Some(acl), None) => format!("redirect url {url} match {acl}"),
        (None, _) => format!("redirect url {url}"),
    };
    let config = service_template(template_name, setting);
    apply(
        device,
        &config,
        "Could not configure service template with redirect url",
    )
    .await
}

/// Assign a security group tag from a service template.
pub async fn configure_service_template_with_sgt<D: Device>(
    device: &mut D,
    template_name: &str,
    sgt: u32,
) -> Result<()> {
    info!("Configuring service template with sgt");
    let config = service_template(template_name, format!("sgt {sgt}"));
    apply(
        device,
        &config,
        "Could not configure service template with sgt",
    )
    .await
}

/// Tag sessions that activate a service template.
pub async fn configure_service_template_with_tag<D: Device>(
    device: &mut D,
    template_name: &str,
    tag: &str,
) -> Result<()> {
    info!("Configuring service template with tag");
    let config = service_template(template_name, format!("tag {tag}"));
    apply(
        device,
        &config,
        "Could not configure service template with tag",
    )
    .await
}

/// Add an arbitrary command under a service template.
pub async fn configure_service_template_with_command_line<D: Device>(
    device: &mut D,
    template_name: &str,
    command: &str,
) -> Result<()> {
    info!("Configuring service template with command");
    let config = service_template(template_name, command.to_string());
    apply(
        device,
        &config,
        "Could not configure service template with command",
    )
    .await
}

/// Match condition of a `class-map type control subscriber match-all`.
///
/// Each variant renders one `match <match_type> ...` line; [`NoMatch`]
/// leaves the class map without a match statement.
///
/// [`NoMatch`]: ClassMapMatch::NoMatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ClassMapMatch {
    /// `match <match_type> <result_type> <method_type> <dot1x_type>`
    MethodResult {
        match_type: String,
        result_type: String,
        method_type: String,
        dot1x_type: String,
    },
    /// `match <match_type> <result_type>`
    Result {
        match_type: String,
        result_type: String,
    },
    /// `match <match_type> <auth_status>`
    AuthStatus {
        match_type: String,
        auth_status: String,
    },
    /// `match <match_type> <method_type>`
    Method {
        match_type: String,
        method_type: String,
    },
    /// `match <match_type> <priority_type> <priority>`
    Priority {
        match_type: String,
        priority_type: String,
        priority: u32,
    },
    NoMatch,
}

impl ClassMapMatch {
    fn command(&self) -> Option<String> {
        match self {
            Self::MethodResult {
                match_type,
                result_type,
                method_type,
                dot1x_type,
            } => Some(format!(
                "match {match_type} {result_type} {method_type} {dot1x_type}"
            )),
            Self::Result {
                match_type,
                result_type,
            } => Some(format!("match {match_type} {result_type}")),
            Self::AuthStatus {
                match_type,
                auth_status,
            } => Some(format!("match {match_type} {auth_status}")),
            Self::Method {
                match_type,
                method_type,
            } => Some(format!("match {match_type} {method_type}")),
            Self::Priority {
                match_type,
                priority_type,
                priority,
            } => Some(format!("match {match_type} {priority_type} {priority}")),
            Self::NoMatch => None,
        }
    }
}

/// Configure a match-all subscriber class map.
pub async fn configure_class_map_subscriber<D: Device>(
    device: &mut D,
    map_name: &str,
    condition: &ClassMapMatch,
) -> Result<()> {
    debug!("Configure Class map Subscriber");
    let config = ConfigLines::new()
        .line(format!(
            "class-map type control subscriber match-all {map_name}"
        ))
        .line_opt(condition.command(), |line| line);
    apply(device, &config, "Could not configure Class map Subscriber").await
}

/// Remove a match-all subscriber class map.
pub async fn unconfigure_class_map_subscriber<D: Device>(device: &mut D, map_name: &str) -> Result<()> {
    debug!("Unconfigure Class Map Subscriber");
    let config = ConfigLines::from(format!(
        "no class-map type control subscriber match-all {map_name}"
    ));
    apply(device, &config, "Could not Unconfigure Class Map Subscriber").await
}

/// Configure a match-any class map on an activated service template.
pub async fn configure_class_map_type_match_any<D: Device>(
    device: &mut D,
    class_map_name: &str,
    service_template_name: &str,
) -> Result<()> {
    info!("Configuring class-map type control subscriber match-any");
    let config = ConfigLines::new()
        .line(format!(
            "class-map type control subscriber match-any {class_map_name}"
        ))
        .line(format!(
            "match activated-service-template {service_template_name}"
        ));
    apply(
        device,
        &config,
        "Could not configure class-map type control subscriber match-any",
    )
    .await
}

/// Configure a match-none class map on an activated service template.
pub async fn configure_class_map_type_match_none<D: Device>(
    device: &mut D,
    class_map_name: &str,
    service_template_name: &str,
) -> Result<()> {
    info!("Configuring class-map type control subscriber match-none");
    let config = ConfigLines::new()
        .line(format!(
            "class-map type control subscriber match-none {class_map_name}"
        ))
        .line(format!(
            "match activated-service-template {service_template_name}"
        ));
    apply(
        device,
        &config,
        "Could not configure class-map type control subscriber match-none",
    )
    .await
}

/// One attribute-to-service mapping in a subscriber parameter map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMapEntry {
    pub parameter_map_name: String,
    pub map_num: u32,
    pub filter_type: String,
    pub parameter_type: String,
    pub parameter_name: String,
    pub action_num: u32,
    pub template_type: String,
    pub template_name: String,
}

/// Configure a subscriber attribute-to-service parameter map entry.
pub async fn configure_parameter_map_subscriber<D: Device>(
    device: &mut D,
    entry: &ParameterMapEntry,
) -> Result<()> {
    debug!("Configure parameter map subscriber");
    let config = ConfigLines::new()
        .line(format!(
            "parameter-map type subscriber attribute-to-service {}",
            entry.parameter_map_name
        ))
        .line(format!(
            "{} map {} {} {}",
            entry.map_num, entry.parameter_type, entry.filter_type, entry.parameter_name
        ))
        .line(format!(
            "{} {} {}",
            entry.action_num, entry.template_type, entry.template_name
        ));
    apply(device, &config, "Could not configure parameter map subscriber").await
}

/// Enable RADIUS system accounting and set console exec timeout, privilege
/// and login list.
pub async fn configure_radius_server_accounting_system<D: Device>(
    device: &mut D,
    minutes: u32,
    seconds: u32,
    privilege_level: u8,
    auth_list: &str,
) -> Result<()> {
    info!("Configuring radius-server accounting system host-config");
    let config = ConfigLines::new()
        .line("radius-server accounting system host-config")
        .line("line console 0")
        .line(format!("exec-timeout {minutes} {seconds}"))
        .line(format!("privilege level {privilege_level}"))
        .line(format!("login authentication {auth_list}"));
    apply(
        device,
        &config,
        "Could not configure radius-server accounting system host-config",
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::{MockDevice, assert_wrapped_failure};

    #[tokio::test]
    async fn test_template_methods() {
        let mut device = MockDevice::new("SW1");

        configure_template_methods_for_dot1x(&mut device, "TPL1", 10, 20, "POLICY1")
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            [
                "template TPL1",
                "dot1x pae authenticator",
                "switchport access vlan 10",
                "switchport mode access",
                "switchport voice vlan 20",
                "mab",
                "access-session closed",
                "access-session port-control auto",
                "authentication periodic",
                "authentication timer reauthenticate server",
                "service-policy type control subscriber POLICY1",
            ]
        );

        configure_template_methods_using_max_reauth(&mut device, "TPL1", 5, 3)
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            [
                "template TPL1",
                "dot1x timeout tx-period 5",
                "dot1x max-reauth-req 3"
            ]
        );

        unconfigure_dot1x_template(&mut device, "TPL1").await.unwrap();
        assert_eq!(device.last_config(), ["no template TPL1"]);
    }

    #[tokio::test]
    async fn test_template_removal_failure() {
        let mut device = MockDevice::new("SW1").failing("% Template in use");

        let err = unconfigure_dot1x_template(&mut device, "TPL1")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not unconfigure template TPL1. Error: Command failed: % Template in use"
        );
    }

    #[tokio::test]
    async fn test_service_template_settings() {
        let mut device = MockDevice::new("SW1");

        configure_service_template_linksec(&mut device, "ST1", "must-secure")
            .await
            .unwrap();
        configure_service_template_voice(&mut device, "ST1")
            .await
            .unwrap();
        configure_service_template_with_inactivity_timer(&mut device, "ST1", 60, false)
            .await
            .unwrap();
        configure_service_template_with_inactivity_timer(&mut device, "ST1", 60, true)
            .await
            .unwrap();
        configure_service_template_with_vlan(&mut device, "ST1", 100)
            .await
            .unwrap();
        configure_service_template_with_access_group(&mut device, "ST1", "ACL-1")
            .await
            .unwrap();
        configure_service_template_with_absolute_timer(&mut device, "ST1", 3600)
            .await
            .unwrap();
        configure_service_template_with_description(&mut device, "ST1", "guest access")
            .await
            .unwrap();
        configure_service_template_with_sgt(&mut device, "ST1", 17)
            .await
            .unwrap();
        configure_service_template_with_tag(&mut device, "ST1", "GUEST")
            .await
            .unwrap();
        configure_service_template_with_command_line(&mut device, "ST1", "interface-template IT1")
            .await
            .unwrap();

        let settings: Vec<&str> = device
            .configured()
            .iter()
            .map(|lines| {
                assert_eq!(lines[0], "service-template ST1");
                lines[1].as_str()
            })
            .collect();
        assert_eq!(
            settings,
            [
                "linksec policy must-secure",
                "voice vlan",
                "inactivity-timer 60",
                "inactivity-timer 60 probe",
                "vlan 100",
                "access-group ACL-1",
                "absolute-timer 3600",
                "description guest access",
                "sgt 17",
                "tag GUEST",
                "interface-template IT1",
            ]
        );

        unconfigure_service_template(&mut device, "ST1")
            .await
            .unwrap();
        assert_eq!(device.last_config(), ["no service-template ST1"]);
    }

    #[tokio::test]
    async fn test_redirect_url() {
        let url = "http://portal.example.com/login";
        let cases = [
            (None, None, format!("redirect url {url}")),
            (Some("REDIR"), None, format!("redirect url {url} match REDIR")),
            (
                Some("REDIR"),
                Some("one-time-redirect"),
                format!("redirect url {url} match REDIR one-time-redirect"),
            ),
            (None, Some("one-time-redirect"), format!("redirect url {url}")),
            (Some(""), Some("one-time-redirect"), format!("redirect url {url}")),
            (Some("REDIR"), Some(""), format!("redirect url {url} match REDIR")),
        ];

        for (acl, option, expected) in cases {
            let mut device = MockDevice::new("SW1");
            configure_service_template_with_redirect_url(&mut device, "WEBAUTH", url, acl, option)
                .await
                .unwrap();
            assert_eq!(
                device.last_config(),
                ["service-template WEBAUTH".to_string(), expected]
            );
        }
    }

    #[tokio::test]
    async fn test_class_map_subscriber() {
        let cases = [
            (
                ClassMapMatch::MethodResult {
                    match_type: "method".to_string(),
                    result_type: "result-type".to_string(),
                    method_type: "dot1x".to_string(),
                    dot1x_type: "authoritative".to_string(),
                },
                Some("match method result-type dot1x authoritative"),
            ),
            (
                ClassMapMatch::Result {
                    match_type: "result-type".to_string(),
                    result_type: "aaa-timeout".to_string(),
                },
                Some("match result-type aaa-timeout"),
            ),
            (
                ClassMapMatch::AuthStatus {
                    match_type: "authorization-status".to_string(),
                    auth_status: "unauthorized".to_string(),
                },
                Some("match authorization-status unauthorized"),
            ),
            (
                ClassMapMatch::Method {
                    match_type: "method".to_string(),
                    method_type: "mab".to_string(),
                },
                Some("match method mab"),
            ),
            (
                ClassMapMatch::Priority {
                    match_type: "method".to_string(),
                    priority_type: "priority gt".to_string(),
                    priority: 20,
                },
                Some("match method priority gt 20"),
            ),
            (ClassMapMatch::NoMatch, None),
        ];

        for (condition, expected) in cases {
            let mut device = MockDevice::new("SW1");
            configure_class_map_subscriber(&mut device, "CM1", &condition)
                .await
                .unwrap();

            let mut lines = vec!["class-map type control subscriber match-all CM1"];
            lines.extend(expected);
            assert_eq!(device.last_config(), lines.as_slice());
        }

        let mut device = MockDevice::new("SW1");
        unconfigure_class_map_subscriber(&mut device, "CM1")
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            ["no class-map type control subscriber match-all CM1"]
        );
    }

    #[test]
    fn test_class_map_match_from_json() {
        let condition: ClassMapMatch = serde_json::from_str(
            r#"{"kind": "auth_status", "match_type": "authorization-status", "auth_status": "authorized"}"#,
        )
        .unwrap();
        assert_eq!(
            condition,
            ClassMapMatch::AuthStatus {
                match_type: "authorization-status".to_string(),
                auth_status: "authorized".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_class_map_match_any_none() {
        let mut device = MockDevice::new("SW1");

        configure_class_map_type_match_any(&mut device, "CM2", "ST1")
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            [
                "class-map type control subscriber match-any CM2",
                "match activated-service-template ST1"
            ]
        );

        configure_class_map_type_match_none(&mut device, "CM3", "ST1")
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            [
                "class-map type control subscriber match-none CM3",
                "match activated-service-template ST1"
            ]
        );
    }

    #[tokio::test]
    async fn test_parameter_map_subscriber() {
        let entry: ParameterMapEntry = serde_json::from_str(
            r#"{
                "parameter_map_name": "PM1",
                "map_num": 10,
                "filter_type": "eq",
                "parameter_type": "device-type",
                "parameter_name": "Cisco-IP-Phone",
                "action_num": 20,
                "template_type": "interface-template",
                "template_name": "VOICE_TPL"
            }"#,
        )
        .unwrap();

        let mut device = MockDevice::new("SW1");
        configure_parameter_map_subscriber(&mut device, &entry)
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            [
                "parameter-map type subscriber attribute-to-service PM1",
                "10 map device-type eq Cisco-IP-Phone",
                "20 interface-template VOICE_TPL",
            ]
        );
    }

    #[tokio::test]
    async fn test_radius_accounting_system() {
        let mut device = MockDevice::new("SW1");

        configure_radius_server_accounting_system(&mut device, 10, 30, 15, "CONSOLE")
            .await
            .unwrap();
        assert_eq!(
            device.last_config(),
            [
                "radius-server accounting system host-config",
                "line console 0",
                "exec-timeout 10 30",
                "privilege level 15",
                "login authentication CONSOLE",
            ]
        );
    }

    #[tokio::test]
    async fn test_every_operation_wraps_failures() {
        let entry = ParameterMapEntry {
            parameter_map_name: "PM1".to_string(),
            map_num: 10,
            filter_type: "eq".to_string(),
            parameter_type: "device-type".to_string(),
            parameter_name: "Cisco-IP-Phone".to_string(),
            action_num: 20,
            template_type: "interface-template".to_string(),
            template_name: "VOICE_TPL".to_string(),
        };

        assert_wrapped_failure!(d => configure_template_methods_for_dot1x(&mut d, "TPL", 10, 20, "P"), "Could not configure template methods for dot1x");
        assert_wrapped_failure!(d => configure_template_methods_using_max_reauth(&mut d, "TPL", 30, 2), "Could not configure template methods using max reauth and timeout");
        assert_wrapped_failure!(d => unconfigure_dot1x_template(&mut d, "TPL"), "Could not unconfigure template TPL");
        assert_wrapped_failure!(d => configure_service_template_linksec(&mut d, "ST", "should-secure"), "Could not configure Service template with link security");
        assert_wrapped_failure!(d => unconfigure_service_template(&mut d, "ST"), "Could not unconfigure Service template");
        assert_wrapped_failure!(d => configure_service_template_voice(&mut d, "ST"), "Could not configure Service template with voice");
        assert_wrapped_failure!(d => configure_service_template_with_inactivity_timer(&mut d, "ST", 60, true), "Could not configure service template with inactivity timer");
        assert_wrapped_failure!(d => configure_service_template_with_vlan(&mut d, "ST", 10), "Could not configure service template with vlan");
        assert_wrapped_failure!(d => configure_service_template_with_access_group(&mut d, "ST", "ACL1"), "Could not configure service template with access group");
        assert_wrapped_failure!(d => configure_service_template_with_absolute_timer(&mut d, "ST", 3600), "Could not configure service template with absolute timer");
        assert_wrapped_failure!(d => configure_service_template_with_description(&mut d, "ST", "guest"), "Could not configure service template with description");
        assert_wrapped_failure!(d => configure_service_template_with_redirect_url(&mut d, "ST", "http://portal", None, None), "Could not configure service template with redirect url");
        assert_wrapped_failure!(d => configure_service_template_with_sgt(&mut d, "ST", 100), "Could not configure service template with sgt");
        assert_wrapped_failure!(d => configure_service_template_with_tag(&mut d, "ST", "GUEST"), "Could not configure service template with tag");
        assert_wrapped_failure!(d => configure_service_template_with_command_line(&mut d, "ST", "interface-template TPL"), "Could not configure service template with command");
        assert_wrapped_failure!(d => configure_class_map_subscriber(&mut d, "CM", &ClassMapMatch::NoMatch), "Could not configure Class map Subscriber");
        assert_wrapped_failure!(d => unconfigure_class_map_subscriber(&mut d, "CM"), "Could not Unconfigure Class Map Subscriber");
        assert_wrapped_failure!(d => configure_class_map_type_match_any(&mut d, "CM", "ST"), "Could not configure class-map type control subscriber match-any");
        assert_wrapped_failure!(d => configure_class_map_type_match_none(&mut d, "CM", "ST"), "Could not configure class-map type control subscriber match-none");
        assert_wrapped_failure!(d => configure_parameter_map_subscriber(&mut d, &entry), "Could not configure parameter map subscriber");
        assert_wrapped_failure!(d => configure_radius_server_accounting_system(&mut d, 5, 30, 15, "LIST1"), "Could not configure radius-server accounting system host-config");
    }
}
