//! Wire formatting helpers for embed fields.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::time::{Clock, SystemClock};

/// A color string could not be interpreted as hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color {input:?}")]
pub struct ColorParseError {
    /// The rejected input, as given by the caller.
    pub input: String,
}

/// Returns the current UTC time in the endpoint's timestamp format.
///
/// The format is `YYYY-MM-DDTHH:MM:SS±HHMM` (numeric offset, no colon);
/// since the time is taken in UTC the offset is always `+0000`.
#[must_use]
pub fn timestamp() -> String {
    timestamp_with(&SystemClock)
}

/// Like [`timestamp`], but reads the instant from the given clock.
#[must_use]
pub fn timestamp_with(clock: &impl Clock) -> String {
    let now: DateTime<Utc> = clock.now().into();
    now.format("%Y-%m-%dT%H:%M:%S%z").to_string()
}

/// Converts a hex color string to the integer the wire format expects.
///
/// A leading `#` is accepted (as is a `#` anywhere in the string; all
/// of them are stripped before parsing). Lenient by policy: input that
/// does not parse as base-16 yields 0 (black) instead of an error, so a
/// bad color never blocks a delivery. Use [`try_parse_color`] to
/// surface the failure instead.
///
/// ```
/// use discord_hook::message::parse_color;
///
/// assert_eq!(parse_color("#00ff00"), 65280);
/// assert_eq!(parse_color("00ff00"), 65280);
/// assert_eq!(parse_color("zz"), 0);
/// ```
#[must_use]
pub fn parse_color(hex: &str) -> u32 {
    try_parse_color(hex).unwrap_or(0)
}

/// Strict variant of [`parse_color`].
///
/// # Errors
///
/// Returns [`ColorParseError`] when, after stripping `#` characters,
/// the input is not a base-16 number that fits in 32 bits (the empty
/// string included).
pub fn try_parse_color(hex: &str) -> Result<u32, ColorParseError> {
    let digits: String = hex.chars().filter(|c| *c != '#').collect();
    u32::from_str_radix(&digits, 16).map_err(|_| ColorParseError {
        input: hex.to_string(),
    })
}
