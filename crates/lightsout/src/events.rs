//! Host lifecycle event vocabulary.

use std::fmt;

/// Named lifecycle events pushed by the host.
///
/// The host emits many more event names than the scheduler acts on; unknown
/// names are preserved in [`PrinterEvent::Other`] and ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterEvent {
    /// Host finished starting up.
    Startup,
    /// Plugin settings were saved.
    SettingsUpdated,
    /// A print job started.
    PrintStarted,
    /// A print job finished.
    PrintDone,
    /// A print job failed.
    PrintFailed,
    /// A print job was canceled.
    PrintCanceled,
    /// Any event the scheduler does not act on.
    Other(String),
}

impl PrinterEvent {
    /// Map a host event name onto the vocabulary.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Startup" => Self::Startup,
            "SettingsUpdated" => Self::SettingsUpdated,
            "PrintStarted" => Self::PrintStarted,
            "PrintDone" => Self::PrintDone,
            "PrintFailed" => Self::PrintFailed,
            "PrintCancelled" | "PrintCanceled" => Self::PrintCanceled,
            other => Self::Other(other.to_string()),
        }
    }

    /// The host-side event name.
    pub fn name(&self) -> &str {
        match self {
            Self::Startup => "Startup",
            Self::SettingsUpdated => "SettingsUpdated",
            Self::PrintStarted => "PrintStarted",
            Self::PrintDone => "PrintDone",
            Self::PrintFailed => "PrintFailed",
            Self::PrintCanceled => "PrintCancelled",
            Self::Other(name) => name,
        }
    }

    /// Does this event leave the printer idle and restart the countdown?
    pub fn re_arms(&self) -> bool {
        matches!(
            self,
            Self::Startup
                | Self::SettingsUpdated
                | Self::PrintFailed
                | Self::PrintDone
                | Self::PrintCanceled
        )
    }
}

impl fmt::Display for PrinterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(PrinterEvent::from_name("Startup"), PrinterEvent::Startup);
        // both spellings arrive from hosts in the wild
        assert_eq!(
            PrinterEvent::from_name("PrintCancelled"),
            PrinterEvent::PrintCanceled
        );
        assert_eq!(
            PrinterEvent::from_name("PrintCanceled"),
            PrinterEvent::PrintCanceled
        );
        assert_eq!(
            PrinterEvent::from_name("ZChange"),
            PrinterEvent::Other("ZChange".into())
        );
    }

    #[test]
    fn test_rearm_membership() {
        assert!(PrinterEvent::Startup.re_arms());
        assert!(PrinterEvent::SettingsUpdated.re_arms());
        assert!(PrinterEvent::PrintDone.re_arms());
        assert!(PrinterEvent::PrintFailed.re_arms());
        assert!(PrinterEvent::PrintCanceled.re_arms());
        assert!(!PrinterEvent::PrintStarted.re_arms());
        assert!(!PrinterEvent::Other("ZChange".into()).re_arms());
    }

    #[test]
    fn test_name_round_trip() {
        for event in [
            PrinterEvent::Startup,
            PrinterEvent::SettingsUpdated,
            PrinterEvent::PrintStarted,
            PrinterEvent::PrintDone,
            PrinterEvent::PrintFailed,
            PrinterEvent::PrintCanceled,
        ] {
            assert_eq!(PrinterEvent::from_name(event.name()), event);
        }
    }
}
