#![warn(missing_docs)]

//! G-code command-line inspection for the LightsOut scheduler.
//!
//! The host's command pipeline pushes every outbound line past the scheduler
//! before it is physically sent. This crate models one such observation and
//! answers the only question the scheduler asks of it: does this line switch
//! the printer lights on?
//!
//! # Example
//!
//! ```
//! use lightsout_gcode::ObservedCommand;
//!
//! let command = ObservedCommand::parse("M150 P255");
//! assert_eq!(command.mnemonic.as_deref(), Some("M150"));
//! assert!(command.is_lights_on());
//!
//! // P0 switches the lights off, so it is not a lights-on signal.
//! assert!(!ObservedCommand::parse("M150 P0").is_lights_on());
//! ```

pub mod command;
pub mod params;

pub use command::{ObservedCommand, LIGHTS_COMMAND};
pub use params::{has_positive_param, int_param};
