#![warn(missing_docs)]

//! LightsOut — idle lights-off scheduling for a 3D-printer control host.
//!
//! Watches print-job lifecycle events and sends a configurable "lights off"
//! command once the printer has sat idle for a configured number of seconds.
//! Switching the lights back on while idle (an `M150` with a positive `P`
//! value) restarts the countdown; starting a job cancels it until the job
//! leaves the printer idle again.
//!
//! The host side is reached through three small traits ([`SettingsProvider`],
//! [`CommandSink`], [`PrinterStatus`]); the scheduler itself exposes the
//! capabilities a host-integration shim wires up ([`EventHandler`],
//! [`CommandObserver`], [`UpdateCheck`]).
//!
//! # Example
//!
//! ```ignore
//! use lightsout::{IdleShutdownScheduler, PrinterEvent};
//!
//! let scheduler = IdleShutdownScheduler::new(host);
//! scheduler.handle_event(&PrinterEvent::Startup)?;      // arms the timer
//! scheduler.handle_event(&PrinterEvent::PrintStarted)?; // disarms it
//! ```

pub mod error;
pub mod events;
pub mod host;
pub mod scheduler;
pub mod settings;
pub mod update;

pub use error::{LightsOutError, Result};
pub use events::PrinterEvent;
pub use host::{
    CommandObserver, CommandSink, EventHandler, PrinterStatus, SettingsProvider, UpdateCheck,
};
pub use lightsout_gcode::ObservedCommand;
pub use scheduler::{IdleShutdownScheduler, SCHEDULER_TAG};
pub use settings::LightsOutSettings;
pub use update::UpdateDescriptor;
