//! Dry-run example
//!
//! This example renders a small edge-port baseline (spanning-tree, 802.1X
//! and storm control) against a device that prints every line instead of
//! sending it anywhere. Useful for reviewing what an operation will push
//! before pointing it at a real transport.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example dry_run -- --hostname edge-sw1 --interface Gi1/0/10
//! ```
//!
//! Simulate a switch still running legacy identity configuration:
//! ```bash
//! cargo run --example dry_run -- --legacy
//! ```

use std::env;

use iosxe_apis::iosxe::dot1x::{
    self, CONFIG_MODE_QUERY, IbnsOptions, IbnsTarget, ReauthTimer, SwitchportMode,
};
use iosxe_apis::iosxe::l2vpn::{self, StormControl};
use iosxe_apis::iosxe::spanning_tree::{self, PortfastOptions};
use iosxe_apis::{CheckedDevice, Device, DeviceError};

/// Prints configuration and answers the identity mode query.
struct DryRunDevice {
    hostname: String,
    legacy: bool,
}

impl Device for DryRunDevice {
    fn name(&self) -> &str {
        &self.hostname
    }

    async fn configure(&mut self, lines: &[String]) -> Result<String, DeviceError> {
        println!("{}(config)# ! {} line(s)", self.hostname, lines.len());
        for line in lines {
            println!("{}(config)# {}", self.hostname, line);
        }
        println!();
        Ok(format!("{}(config)#", self.hostname))
    }

    async fn execute(&mut self, command: &str) -> Result<String, DeviceError> {
        println!("{}# {}", self.hostname, command);
        if command == CONFIG_MODE_QUERY {
            let mode = if self.legacy { "legacy" } else { "new-style" };
            return Ok(format!("Current configuration mode is {mode}"));
        }
        Ok(String::new())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    println!("=== iosxe-apis Dry Run ===\n");

    let mut device = CheckedDevice::iosxe(DryRunDevice {
        hostname: args.hostname.clone(),
        legacy: args.legacy,
    });

    // Spanning-tree baseline
    spanning_tree::configure_spanning_tree_mode(&mut device, "rapid-pvst", Some("extend system-id"))
        .await?;
    spanning_tree::configure_spanning_tree_portfast(
        &mut device,
        PortfastOptions {
            default: true,
            bpduguard: true,
            ..Default::default()
        },
    )
    .await?;
    spanning_tree::configure_spanning_tree_guard_root(&mut device, &args.interface).await?;

    // Identity
    dot1x::configure_mode_to_eedge(&mut device).await?;
    dot1x::enable_dot1x_sysauthcontrol(&mut device).await?;
    dot1x::config_identity_ibns(
        &mut device,
        "PMAP_DefaultWiredDot1xClosedAuth_1X_MAB",
        &IbnsTarget::Interface(args.interface.clone()),
        SwitchportMode::Access,
        "auto",
        &IbnsOptions {
            data_vlan: Some(args.vlan),
            closed: true,
            reauth: Some(ReauthTimer::Server),
            ..Default::default()
        },
    )
    .await?;

    // Storm control on the uplink service instance
    l2vpn::configure_l2vpn_storm_control(
        &mut device,
        &args.interface,
        args.vlan.into(),
        &[
            StormControl::new("broadcast", "cir", 8000.0),
            StormControl::new("multicast", "cir", 8000.0),
        ],
    )
    .await?;

    println!("Done.");
    Ok(())
}

/// Simple argument parser
struct Args {
    hostname: String,
    interface: String,
    vlan: u16,
    legacy: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut hostname = "switch".to_string();
        let mut interface = "Gi1/0/1".to_string();
        let mut vlan = 10u16;
        let mut legacy = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--hostname" | "-n" => {
                    i += 1;
                    if i < args.len() {
                        hostname = args[i].clone();
                    }
                }
                "--interface" | "-i" => {
                    i += 1;
                    if i < args.len() {
                        interface = args[i].clone();
                    }
                }
                "--vlan" | "-v" => {
                    i += 1;
                    if i < args.len() {
                        vlan = args[i].parse().unwrap_or(10);
                    }
                }
                "--legacy" | "-l" => {
                    legacy = true;
                }
                "--help" => {
                    println!("Usage: dry_run [OPTIONS]");
                    println!();
                    println!("Options:");
                    println!("  -n, --hostname <NAME>       Prompt name (default: switch)");
                    println!("  -i, --interface <INTF>      Edge interface (default: Gi1/0/1)");
                    println!("  -v, --vlan <ID>             Access VLAN (default: 10)");
                    println!("  -l, --legacy                Simulate legacy identity mode");
                    std::process::exit(0);
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            hostname,
            interface,
            vlan,
            legacy,
        }
    }
}
