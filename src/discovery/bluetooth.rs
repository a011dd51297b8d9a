//! Bluetooth device discovery worker
//!
//! Runs as a background task on its own cadence, decoupled from the UI tick:
//! discover for up to five seconds, publish, idle six seconds, repeat. The
//! render loop only ever reads the latest published result; it never triggers
//! or waits on a cycle. The worker writes nothing in the session state but
//! its own channel slot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::model::{DiscoveryChannel, SessionModel};

use super::{run_scan_command, DiscoveryError};

/// How long one discovery window lasts.
const DISCOVER_WINDOW: Duration = Duration::from_secs(5);
/// Idle time between discovery windows.
const IDLE_INTERVAL: Duration = Duration::from_secs(6);
/// Upper bound on one tool invocation, discovery window included.
const TOOL_TIMEOUT: Duration = Duration::from_secs(8);

/// Spawns the worker. It runs until the shutdown flag flips, polled at each
/// idle boundary so a scan in flight is allowed to finish.
pub fn spawn(model: Arc<SessionModel>, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("bluetooth discovery worker started");
        loop {
            let outcome = discover_devices().await;
            match &outcome {
                Ok(devices) => tracing::debug!(count = devices.len(), "bluetooth scan finished"),
                Err(err) => tracing::warn!(error = %err, "bluetooth scan failed"),
            }
            model
                .publish_discovery(
                    DiscoveryChannel::Bluetooth,
                    outcome.map_err(|e| e.to_string()),
                )
                .await;

            tokio::select! {
                _ = tokio::time::sleep(IDLE_INTERVAL) => {}
                _ = shutdown.changed() => {}
            }
            if *shutdown.borrow() {
                tracing::info!("bluetooth discovery worker stopping");
                return;
            }
        }
    })
}

/// One best-effort cycle: let the adapter scan for the discovery window,
/// then list every device it has seen.
async fn discover_devices() -> Result<Vec<String>, DiscoveryError> {
    let window = DISCOVER_WINDOW.as_secs().to_string();
    run_scan_command(
        "bluetoothctl",
        &["--timeout", window.as_str(), "scan", "on"],
        TOOL_TIMEOUT,
    )
    .await?;

    let listing = run_scan_command("bluetoothctl", &["devices"], TOOL_TIMEOUT).await?;
    Ok(parse_device_listing(&listing))
}

/// bluetoothctl prints `Device <address> <name>` per device. Entries render
/// as "name (address)"; when the tool has no real name it repeats the
/// address (colon- or dash-separated), in which case only the address shows.
fn parse_device_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let rest = line.trim().strip_prefix("Device ")?;
            let (address, name) = rest.split_once(' ').unwrap_or((rest, ""));
            let name = name.trim();
            if name.is_empty() || name == address || name == address.replace(':', "-") {
                Some(address.to_string())
            } else {
                Some(format!("{name} ({address})"))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_devices_render_as_name_with_address() {
        let output = "Device AA:BB:CC:DD:EE:FF My Speaker\nDevice 11:22:33:44:55:66 Buds Pro\n";
        assert_eq!(
            parse_device_listing(output),
            vec!["My Speaker (AA:BB:CC:DD:EE:FF)", "Buds Pro (11:22:33:44:55:66)"]
        );
    }

    #[test]
    fn unnamed_devices_fall_back_to_address_only() {
        let output = "Device AA:BB:CC:DD:EE:FF AA-BB-CC-DD-EE-FF\nDevice 11:22:33:44:55:66\n";
        assert_eq!(
            parse_device_listing(output),
            vec!["AA:BB:CC:DD:EE:FF", "11:22:33:44:55:66"]
        );
    }

    #[test]
    fn unrelated_tool_output_is_ignored() {
        let output = "Agent registered\n[bluetooth]# Discovery started\nDevice AA:BB:CC:DD:EE:FF Speaker\n";
        assert_eq!(parse_device_listing(output), vec!["Speaker (AA:BB:CC:DD:EE:FF)"]);
    }
}
