//! Per-channel discovery result slots

use std::time::{Duration, Instant};

/// Latest published result for one discovery channel.
///
/// A scan outcome replaces the whole slot in a single assignment under the
/// channel's lock, so a reader can never observe a fresh list paired with a
/// stale error or vice versa.
#[derive(Clone, Debug, Default)]
pub struct DiscoverySlot {
    /// Entries in scan-result order; duplicates allowed.
    pub entries: Vec<String>,
    pub error: Option<String>,
    pub last_scan: Option<Instant>,
}

impl DiscoverySlot {
    /// Replaces the slot with a scan outcome. Success installs the new list
    /// and clears the error; failure records the error and empties the list.
    pub fn publish(&mut self, outcome: Result<Vec<String>, String>, now: Instant) {
        match outcome {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(message) => {
                self.entries = Vec::new();
                self.error = Some(message);
            }
        }
        self.last_scan = Some(now);
    }

    /// Whether enough time has passed since the last scan (of any outcome)
    /// for another one to run.
    pub fn is_due(&self, interval: Duration, now: Instant) -> bool {
        match self.last_scan {
            Some(at) => now.saturating_duration_since(at) > interval,
            None => true,
        }
    }
}
