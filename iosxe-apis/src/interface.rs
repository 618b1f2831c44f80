//! Interface name canonicalization.
//!
//! IOS-XE accepts abbreviated interface names on the CLI but reports and
//! matches configuration using the full name. Operations that build
//! `interface <name>` lines from user input run the name through
//! [`canonical_interface_name`] first, so `Gi1/0/1` and
//! `GigabitEthernet1/0/1` produce the same configuration.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Interface type abbreviations and the full type name they expand to.
static ALIASES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("Eth", "Ethernet"),
        ("Lo", "Loopback"),
        ("Fa", "FastEthernet"),
        ("Fas", "FastEthernet"),
        ("Po", "Port-channel"),
        ("Null", "Null"),
        ("Gi", "GigabitEthernet"),
        ("Gig", "GigabitEthernet"),
        ("GE", "GigabitEthernet"),
        ("Te", "TenGigabitEthernet"),
        ("Ten", "TenGigabitEthernet"),
        ("Tw", "TwoGigabitEthernet"),
        ("Two", "TwoGigabitEthernet"),
        ("Twe", "TwentyFiveGigE"),
        ("Fi", "FiveGigabitEthernet"),
        ("Fo", "FortyGigabitEthernet"),
        ("Hu", "HundredGigE"),
        ("Vl", "Vlan"),
        ("Tu", "Tunnel"),
        ("Se", "Serial"),
        ("BD", "BDI"),
        ("Ap", "AppGigabitEthernet"),
        ("Bl", "BlueGigabitEthernet"),
        ("Mg", "mgmt"),
        ("Nv", "nve"),
        ("Di", "Dialer"),
        ("Vi", "Virtual-Access"),
    ])
});

/// Interface type followed by the slot/port part, optionally space separated.
static INTERFACE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z\-]*)\s*(\d\S*)$").expect("interface pattern is valid")
});

/// Expand an abbreviated interface name to its full IOS-XE form.
///
/// Abbreviations are matched exactly first, then case-insensitively. A full
/// type name in any case is normalized to its canonical spelling. Names with
/// an unknown type, or without a numeric part, are returned unchanged.
///
/// ```rust
/// use iosxe_apis::canonical_interface_name;
///
/// assert_eq!(canonical_interface_name("Gi1/0/1"), "GigabitEthernet1/0/1");
/// assert_eq!(canonical_interface_name("po 10"), "Port-channel10");
/// assert_eq!(canonical_interface_name("Vlan100"), "Vlan100");
/// ```
pub fn canonical_interface_name(name: &str) -> String {
    let trimmed = name.trim();
    let Some(caps) = INTERFACE_PATTERN.captures(trimmed) else {
        return name.to_string();
    };
    let kind = &caps[1];
    let port = &caps[2];

    match resolve_kind(kind) {
        Some(full) => format!("{full}{port}"),
        None => name.to_string(),
    }
}

/// Iterate over the known abbreviations and their expansions.
pub fn interface_aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIASES.iter().map(|(alias, full)| (*alias, *full))
}

fn resolve_kind(kind: &str) -> Option<&'static str> {
    if let Some(full) = ALIASES.get(kind) {
        return Some(*full);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(kind))
        .map(|(_, full)| *full)
        .or_else(|| {
            ALIASES
                .values()
                .find(|full| full.eq_ignore_ascii_case(kind))
                .copied()
        })
}
