//! Error types for reference-time parsing and job resolution.

use std::fmt;

use crate::resolve::Skip;

/// A byte range within an input string, used to point diagnostics at the
/// offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Which time field of a job record a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hour,
    Minute,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Minute => "minute",
        }
    }

    /// Largest literal value the field accepts in a job record.
    pub fn max(self) -> u8 {
        match self {
            Self::Hour => 23,
            Self::Minute => 59,
        }
    }
}

/// Errors produced while parsing a reference time or resolving a job table.
///
/// The first two variants are fatal to a whole resolution pass; the record
/// variant only drops the record that carries it.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ResolveError {
    /// The reference time string is not in `H:M` shape.
    MalformedTime {
        message: String,
        span: Span,
        input: String,
    },

    /// The reference hour or minute is past the wraparound bounds.
    OutOfRange {
        message: String,
        span: Span,
        input: String,
    },

    /// A job record's hour or minute field is unusable. The record is
    /// skipped and the pass continues.
    InvalidField {
        field: Field,
        value: String,
        message: String,
    },

    /// A pass finished with no resolved jobs at all. Carries the records
    /// that were dropped on the way, if any.
    Empty { skipped: Vec<Skip> },
}

impl ResolveError {
    pub fn malformed_time(
        message: impl Into<String>,
        span: Span,
        input: impl Into<String>,
    ) -> Self {
        Self::MalformedTime {
            message: message.into(),
            span,
            input: input.into(),
        }
    }

    pub fn out_of_range(message: impl Into<String>, span: Span, input: impl Into<String>) -> Self {
        Self::OutOfRange {
            message: message.into(),
            span,
            input: input.into(),
        }
    }

    pub fn invalid_field(field: Field, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn empty(skipped: Vec<Skip>) -> Self {
        Self::Empty { skipped }
    }

    /// Render the error with the input line and a caret underline, for
    /// terminal display. Variants without a span fall back to `error: {msg}`.
    pub fn display_rich(&self) -> String {
        match self {
            Self::MalformedTime {
                message,
                span,
                input,
            }
            | Self::OutOfRange {
                message,
                span,
                input,
            } => format_span_error(message, *span, input),
            other => format!("error: {other}"),
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTime { message, .. }
            | Self::OutOfRange { message, .. }
            | Self::InvalidField { message, .. } => f.write_str(message),
            Self::Empty { .. } => f.write_str("no jobs resolved"),
        }
    }
}

impl std::error::Error for ResolveError {}

fn format_span_error(message: &str, span: Span, input: &str) -> String {
    let mut out = format!("error: {message}\n");
    out.push_str(&format!("  {input}\n"));
    out.push_str(&" ".repeat(span.start + 2));
    out.push_str(&"^".repeat((span.end - span.start).max(1)));
    out
}
