//! Field resolution and the resolution pass.
//!
//! A pass canonicalizes the reference time once, then walks the records in
//! order. Whether a job fires today or tomorrow is decided by the hour
//! field alone; the minute never flips the day.

use crate::clock::{self, ClockTime};
use crate::error::{Field, ResolveError};
use crate::tab::TabEntry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The token that matches the corresponding reference-time component.
pub const WILDCARD: &str = "*";

/// Whether an occurrence lands on the reference day or the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Day {
    Today,
    Tomorrow,
}

impl Day {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }
}

/// A job's next firing, classified against the reference time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FireTime {
    pub time: ClockTime,
    pub day: Day,
    pub task: String,
}

/// A record dropped during a pass: where it sat, what it said, and why it
/// fell out.
#[derive(Debug, Clone)]
pub struct Skip {
    /// 0-based position of the record among the parsed entries.
    pub index: usize,
    pub entry: TabEntry,
    pub error: ResolveError,
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The canonical reference time the records were resolved against.
    pub reference: ClockTime,
    /// Resolved occurrences, in input order.
    pub fired: Vec<FireTime>,
    /// Records dropped along the way, in input order.
    pub skipped: Vec<Skip>,
}

/// Resolve one record against an already-canonical reference time.
///
/// The hour field is validated first, so a record that is bad in both
/// fields reports its hour. A wildcard hour pins the job to the reference
/// hour, today; a literal hour strictly below the reference hour pushes the
/// firing to tomorrow, and an equal hour stays today.
pub fn resolve_entry(entry: &TabEntry, reference: ClockTime) -> Result<FireTime, ResolveError> {
    let (hour, day) = if entry.hour == WILDCARD {
        (reference.hour, Day::Today)
    } else {
        let hour = parse_field(&entry.hour, Field::Hour)?;
        let day = if hour < reference.hour {
            Day::Tomorrow
        } else {
            Day::Today
        };
        (hour, day)
    };

    let minute = if entry.minute == WILDCARD {
        reference.minute
    } else {
        parse_field(&entry.minute, Field::Minute)?
    };

    Ok(FireTime {
        time: ClockTime { hour, minute },
        day,
        task: entry.task.clone(),
    })
}

/// Run a resolution pass over a whole table.
///
/// The reference time is parsed and canonicalized first; if that fails the
/// pass aborts before touching any record. Bad records are collected as
/// [`Skip`]s while the pass carries on. A pass that ends with nothing
/// resolved reports [`ResolveError::Empty`] instead of an empty success.
pub fn resolve(reference: &str, entries: Vec<TabEntry>) -> Result<Resolution, ResolveError> {
    let reference = clock::parse(reference)?;

    let mut fired = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match resolve_entry(&entry, reference) {
            Ok(fire) => fired.push(fire),
            Err(error) => skipped.push(Skip {
                index,
                entry,
                error,
            }),
        }
    }

    if fired.is_empty() {
        return Err(ResolveError::empty(skipped));
    }

    Ok(Resolution {
        reference,
        fired,
        skipped,
    })
}

fn parse_field(raw: &str, field: Field) -> Result<u8, ResolveError> {
    let value: u8 = raw.parse().map_err(|_| {
        ResolveError::invalid_field(
            field,
            raw,
            format!("invalid {} field '{raw}'", field.as_str()),
        )
    })?;
    if value > field.max() {
        return Err(ResolveError::invalid_field(
            field,
            raw,
            format!("{} must be 0-{}, got {value}", field.as_str(), field.max()),
        ));
    }
    Ok(value)
}
