//! Reference-time parsing and canonicalization.
//!
//! A reference time is an `H:M` string. Hours up to 24 and minutes up to 60
//! are accepted and wrapped into canonical range before anything compares
//! against them; values past those bounds are rejected outright.

use crate::error::{ResolveError, Span};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wall-clock time of day in canonical range: hour `0..=23`, minute
/// `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

/// Parse an `H:M` string into a canonical [`ClockTime`].
///
/// Tokens need no zero padding. Out-of-range values wrap in a fixed order:
/// `24:60` becomes `01:00`, `23:60` becomes `00:00`, any other `H:60`
/// becomes `H+1:00`, and `24:M` becomes `00:M`. An hour above 24 or a
/// minute above 60 is an error, not a wrap.
pub fn parse(input: &str) -> Result<ClockTime, ResolveError> {
    let input = input.trim();
    let Some((hour_tok, minute_tok)) = input.split_once(':') else {
        return Err(ResolveError::malformed_time(
            "reference time must be 'H:M'",
            Span::new(0, input.len()),
            input,
        ));
    };

    let hour_span = Span::new(0, hour_tok.len());
    let minute_span = Span::new(hour_tok.len() + 1, input.len());

    let hour: u32 = hour_tok.parse().map_err(|_| {
        ResolveError::malformed_time(
            format!("invalid hour '{hour_tok}' in reference time"),
            hour_span,
            input,
        )
    })?;
    let minute: u32 = minute_tok.parse().map_err(|_| {
        ResolveError::malformed_time(
            format!("invalid minute '{minute_tok}' in reference time"),
            minute_span,
            input,
        )
    })?;

    if hour > 24 {
        return Err(ResolveError::out_of_range(
            format!("reference hour must be 0-24, got {hour}"),
            hour_span,
            input,
        ));
    }
    if minute > 60 {
        return Err(ResolveError::out_of_range(
            format!("reference minute must be 0-60, got {minute}"),
            minute_span,
            input,
        ));
    }

    // Wraparound rules, tried in order. The double-overflow case comes
    // first so 24:60 lands on 01:00 rather than wrapping twice to 00:00.
    let (hour, minute) = match (hour, minute) {
        (24, 60) => (1, 0),
        (23, 60) => (0, 0),
        (h, 60) => (h + 1, 0),
        (24, m) => (0, m),
        (h, m) => (h, m),
    };

    Ok(ClockTime {
        hour: hour as u8,
        minute: minute as u8,
    })
}

#[cfg(feature = "serde")]
impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:02}:{:02}", self.hour, self.minute))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}
