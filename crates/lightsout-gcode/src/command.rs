//! Outbound command observations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::params;

/// Mnemonic of the LED control command used to switch printer lights.
pub const LIGHTS_COMMAND: &str = "M150";

/// A single outbound command line with its decoded fields.
///
/// Hosts that already run a command decoder supply every field themselves;
/// [`ObservedCommand::parse`] re-derives the mnemonic and subcode from the
/// raw line for hosts that do not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservedCommand {
    /// Raw command line as queued for the printer.
    pub line: String,
    /// Command mnemonic (e.g. `M150`), when the line carries one.
    pub mnemonic: Option<String>,
    /// Subcode for dialects with `M601.1`-style commands.
    pub subcode: Option<u32>,
    /// Host-attached tags identifying the command's origin.
    pub tags: HashSet<String>,
}

impl ObservedCommand {
    /// Decode a raw line into an observation with no tags.
    pub fn parse(line: impl Into<String>) -> Self {
        let line = line.into();
        let (mnemonic, subcode) = decode_mnemonic(&line);
        Self {
            line,
            mnemonic,
            subcode,
            tags: HashSet::new(),
        }
    }

    /// Attach origin tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Is this line a request to switch the lights on?
    ///
    /// True iff the mnemonic is [`LIGHTS_COMMAND`] and a `P`-prefixed token
    /// carries a value strictly greater than zero.
    pub fn is_lights_on(&self) -> bool {
        self.mnemonic.as_deref() == Some(LIGHTS_COMMAND)
            && params::has_positive_param(&self.line, 'P')
    }
}

/// Split the leading mnemonic (and optional `.` subcode) off a raw line.
fn decode_mnemonic(line: &str) -> (Option<String>, Option<u32>) {
    let code = line.split(';').next().unwrap_or("").trim();
    let code = code.split(' ').next().unwrap_or("");
    let (head, sub) = match code.split_once('.') {
        Some((head, sub)) => (head, Some(sub)),
        None => (code, None),
    };
    if !is_mnemonic(head) {
        return (None, None);
    }
    // a malformed subcode is dropped, not an error
    let subcode = sub.and_then(|digits| digits.parse().ok());
    (Some(head.to_ascii_uppercase()), subcode)
}

/// A mnemonic is a leading `G`/`M`/`T` followed by digits.
fn is_mnemonic(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some('G' | 'M' | 'T' | 'g' | 'm' | 't')) && {
        let rest = &token[1..];
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
    }
}
