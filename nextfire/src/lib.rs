//! nextfire resolves a minimal cron table against a reference time.
//!
//! A job table is lines of `minute hour task`, where either time field may
//! be the wildcard `*`. Given an `H:M` reference time, each job resolves to
//! the `HH:MM` at which it next fires and whether that is today or
//! tomorrow. The reference time tolerates the wraparound values 24 and 60,
//! which are canonicalized before any job is compared against them.
//!
//! # Examples
//!
//! ```
//! use nextfire::Tab;
//!
//! let tab = Tab::parse("30 1 /bin/backup\n45 * /bin/poll\n");
//! let resolution = tab.resolve("16:10").unwrap();
//! let lines: Vec<String> = resolution.fired.iter().map(|f| f.to_string()).collect();
//! assert_eq!(lines, ["01:30 tomorrow - /bin/backup", "16:45 today - /bin/poll"]);
//! ```
//!
//! Records with invalid fields are dropped, not fatal; they come back as
//! [`Skip`]s on the [`Resolution`]:
//!
//! ```
//! use nextfire::Tab;
//!
//! let tab = Tab::parse("0 99 broken\n* * fine\n");
//! let resolution = tab.resolve("16:10").unwrap();
//! assert_eq!(resolution.fired.len(), 1);
//! assert_eq!(resolution.skipped.len(), 1);
//! assert_eq!(resolution.skipped[0].error.to_string(), "hour must be 0-23, got 99");
//! ```

pub mod clock;
pub mod display;
pub mod error;
pub mod resolve;
pub mod tab;

pub use clock::ClockTime;
pub use error::{Field, ResolveError, Span};
pub use resolve::{Day, FireTime, Resolution, Skip, WILDCARD};
pub use tab::{BadLine, Tab, TabEntry};

use std::str::FromStr;

impl Tab {
    /// Parse table text into records. Malformed lines are collected on the
    /// returned [`Tab`], never fatal.
    pub fn parse(input: &str) -> Self {
        tab::parse(input)
    }

    /// Resolve every record against an `H:M` reference time, consuming the
    /// table.
    pub fn resolve(self, reference: &str) -> Result<Resolution, ResolveError> {
        resolve::resolve(reference, self.entries)
    }
}

impl ClockTime {
    /// Parse and canonicalize an `H:M` reference time string.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        clock::parse(input)
    }
}

impl FromStr for ClockTime {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
