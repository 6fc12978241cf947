// src/health/status.rs
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Checking, // Probe not settled yet
    Online,
    Offline,
}

impl Status {
    /// Text shown next to "Backend Status:".
    pub fn label(self) -> &'static str {
        match self {
            Status::Checking => "checking...",
            Status::Online => "Backend Online",
            Status::Offline => "Backend Offline",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Checking)
    }

    /// Move to `next` if allowed. Only `Checking` may be left, and only
    /// towards a terminal variant.
    pub fn transition(&mut self, next: Status) -> bool {
        if *self != Status::Checking || !next.is_terminal() {
            return false;
        }
        *self = next;
        true
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Checking => "checking",
            Status::Online => "online",
            Status::Offline => "offline",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
