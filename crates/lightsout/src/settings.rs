//! Scheduler configuration snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LightsOutError, Result};

/// Plugin settings as stored by the host.
///
/// The scheduler reads a fresh snapshot on every scheduling decision and
/// never writes one back; the host's settings subsystem owns mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightsOutSettings {
    /// Master switch for the idle shutdown.
    pub enabled: bool,
    /// Idle seconds before the off-command is sent.
    pub timeout_seconds: u64,
    /// Command dispatched when the timeout elapses.
    pub off_command: String,
}

impl Default for LightsOutSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_seconds: 300,
            off_command: "M150 P0".into(),
        }
    }
}

impl LightsOutSettings {
    /// Idle timeout as a [`Duration`].
    ///
    /// Zero is rejected: the delay must fully elapse before a fire, so there
    /// is no fire-on-arm configuration.
    pub fn timeout(&self) -> Result<Duration> {
        if self.timeout_seconds == 0 {
            return Err(LightsOutError::InvalidSettings(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(Duration::from_secs(self.timeout_seconds))
    }
}
