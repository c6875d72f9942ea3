//! Logging and failure-raising facade shared by every component.
//!
//! The reporter is the single mechanism by which internal failures become
//! propagated errors: `report` records a message at a severity and hands it
//! back unchanged, `fail` records an error-level event and returns the typed
//! error for the caller to propagate with `return Err(...)`. Nothing is ever
//! swallowed silently.

use std::str::FromStr;

use crate::{Error, failure, info, warning};

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Parses a level name; unknown names surface as [`Error::InvalidLevel`].
impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            other => Err(Error::InvalidLevel(other.to_string())),
        }
    }
}

/// Records outcomes and raises typed failures on behalf of the components
/// that hold it. Handlers receive a shared reporter through an axum
/// `Extension`; the tunnel manager holds one directly.
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Reporter
    }

    /// Writes one log record at the given severity and returns the message
    /// unchanged, so call sites can log and forward a message in one step.
    pub fn report<'a>(&self, message: &'a str, level: Level) -> &'a str {
        match level {
            Level::Info => info!("{message}"),
            Level::Warning => warning!("{message}"),
            Level::Error => failure!("{message}"),
        }
        message
    }

    /// Records the error as an error-level event, then returns it for
    /// propagation. Every failure path passes through here exactly once
    /// before surfacing.
    pub fn fail(&self, err: Error) -> Error {
        failure!("{err}");
        err
    }
}
