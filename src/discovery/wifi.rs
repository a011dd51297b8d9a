//! WiFi network discovery
//!
//! One scan cycle shells out to the platform tool (nmcli on Linux, airport
//! on macOS, netsh on Windows) under a hard timeout and parses the output
//! into an ordered list of SSIDs. The scan is invoked from the render path
//! while the WiFi settings screen is visible, gated by a minimum re-scan
//! interval so a slow tool cannot be command-flooded, and it can never stall
//! a frame past the timeout.

use std::time::Duration;

use crate::model::{DiscoveryChannel, SessionModel};

use super::{run_scan_command, DiscoveryError};

/// Minimum interval between two scans while the WiFi screen is visible.
pub const RESCAN_INTERVAL: Duration = Duration::from_secs(6);
/// Hard cap on how long the scan command may run.
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(8);

/// Runs one gated scan cycle and publishes the outcome into the WiFi slot.
/// Returns immediately when the last scan is newer than the re-scan window.
pub async fn refresh_if_stale(model: &SessionModel) {
    if !model
        .discovery_due(DiscoveryChannel::Wifi, RESCAN_INTERVAL)
        .await
    {
        return;
    }

    let outcome = scan_networks().await;
    match &outcome {
        Ok(networks) => tracing::debug!(count = networks.len(), "wifi scan finished"),
        Err(err) => tracing::warn!(error = %err, "wifi scan failed"),
    }
    model
        .publish_discovery(DiscoveryChannel::Wifi, outcome.map_err(|e| e.to_string()))
        .await;
}

#[cfg(target_os = "linux")]
async fn scan_networks() -> Result<Vec<String>, DiscoveryError> {
    let stdout = run_scan_command(
        "nmcli",
        &["-t", "-f", "SSID,SIGNAL", "dev", "wifi", "list"],
        SCAN_TIMEOUT,
    )
    .await?;
    Ok(parse_nmcli_output(&stdout))
}

#[cfg(target_os = "macos")]
async fn scan_networks() -> Result<Vec<String>, DiscoveryError> {
    const AIRPORT: &str = "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";
    let stdout = run_scan_command(AIRPORT, &["-s"], SCAN_TIMEOUT).await?;
    Ok(parse_airport_output(&stdout))
}

#[cfg(target_os = "windows")]
async fn scan_networks() -> Result<Vec<String>, DiscoveryError> {
    let stdout = run_scan_command(
        "netsh",
        &["wlan", "show", "networks", "mode=Bssid"],
        SCAN_TIMEOUT,
    )
    .await?;
    Ok(parse_netsh_output(&stdout))
}

/// nmcli terse mode: one `SSID:SIGNAL` line per BSS. Hidden networks show an
/// empty SSID and are dropped; duplicates are kept in result order.
#[cfg(any(target_os = "linux", test))]
fn parse_nmcli_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let ssid = line.split(':').next().unwrap_or("").trim();
            (!ssid.is_empty()).then(|| ssid.to_string())
        })
        .collect()
}

/// airport -s: header line, then one row per network with the SSID first.
#[cfg(any(target_os = "macos", test))]
fn parse_airport_output(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect()
}

/// netsh: `SSID <n> : <name>` lines among other output.
#[cfg(any(target_os = "windows", test))]
fn parse_netsh_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if !line.starts_with("SSID ") {
                return None;
            }
            let name = line.split_once(" : ")?.1.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}
