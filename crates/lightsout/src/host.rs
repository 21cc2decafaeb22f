//! Interfaces between the scheduler and its host.
//!
//! The consumed side ([`SettingsProvider`], [`CommandSink`],
//! [`PrinterStatus`]) is implemented by the host-integration shim; the
//! exposed side ([`EventHandler`], [`CommandObserver`], [`UpdateCheck`]) is
//! implemented by the scheduler and wired into whatever callback mechanism
//! the host offers. Each seam is independently testable.

use serde_json::Value;

use lightsout_gcode::ObservedCommand;

use crate::error::Result;
use crate::events::PrinterEvent;
use crate::settings::LightsOutSettings;
use crate::update::UpdateDescriptor;

/// Read-only access to the host-managed plugin settings.
pub trait SettingsProvider {
    /// Read the current settings snapshot.
    fn settings(&self) -> Result<LightsOutSettings>;
}

/// Outbound command channel to the printer.
pub trait CommandSink {
    /// Queue `command` for the printer, labelled with origin `tags`.
    fn send(&self, command: &str, tags: &[&str]) -> Result<()>;
}

/// Job state as reported by the host, consulted on lights-on observations.
pub trait PrinterStatus {
    /// Is a job currently printing?
    fn is_printing(&self) -> bool;
    /// Is a job currently paused?
    fn is_paused(&self) -> bool;
}

/// Receives named lifecycle events from the host.
pub trait EventHandler {
    /// Handle one event. The payload is host-specific and may be ignored.
    fn on_event(&self, event: &PrinterEvent, payload: &Value) -> Result<()>;
}

/// Observes every outbound command line before it is physically sent.
pub trait CommandObserver {
    /// Inspect one observation; implementations never block or filter the
    /// command stream.
    fn on_command_sent(&self, command: &ObservedCommand) -> Result<()>;
}

/// Describes this plugin to the host's software-update checker.
pub trait UpdateCheck {
    /// The static update descriptor.
    fn update_information(&self) -> UpdateDescriptor;
}
