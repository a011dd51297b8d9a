//! Discovery workers for the WiFi and Bluetooth channels
//!
//! Both channels shell out to a platform scan tool and publish their parsed
//! results into the session state. They differ in cadence:
//!
//! - `wifi`: runs inline on the render path while the WiFi screen is
//!   visible, gated to one bounded scan per window
//! - `bluetooth`: runs as a background task on its own scan/idle cycle for
//!   the process lifetime
//!
//! Every failure ends up in the channel's error field; nothing here can
//! terminate the render loop.

pub mod bluetooth;
pub mod wifi;

use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

/// Why a scan cycle produced no result
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("scan tool not found: {0}")]
    ToolNotFound(String),
    #[error("scan timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("scan failed: {0}")]
    ScanFailed(String),
}

impl DiscoveryError {
    fn from_spawn(tool: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::ToolNotFound(tool.to_string())
        } else {
            Self::ScanFailed(format!("{tool}: {err}"))
        }
    }
}

/// Runs a scan tool to completion within `limit` and returns its stdout.
/// The child is killed if the future is dropped at the timeout.
async fn run_scan_command(
    tool: &str,
    args: &[&str],
    limit: Duration,
) -> Result<String, DiscoveryError> {
    let output = Command::new(tool).args(args).kill_on_drop(true).output();

    match timeout(limit, output).await {
        Err(_) => Err(DiscoveryError::Timeout(limit)),
        Ok(Err(err)) => Err(DiscoveryError::from_spawn(tool, err)),
        Ok(Ok(output)) if !output.status.success() => Err(DiscoveryError::ScanFailed(format!(
            "{tool} exited with {}",
            output.status
        ))),
        Ok(Ok(output)) => String::from_utf8(output.stdout)
            .map_err(|_| DiscoveryError::ScanFailed(format!("{tool} produced non-UTF8 output"))),
    }
}
