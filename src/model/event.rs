use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of entries the event log retains.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    Welcome,
    ActionSucceeded,
    ActionRejected,
    Starvation,
    Blackout,
    FireSpread,
    FireBurnout,
    Collapse,
    CollapseDamage,
    Exodus,
    Crisis,
    MinorEvent,
    DilemmaResolved,
}

string_enum!(EventKind {
    Welcome => "welcome",
    ActionSucceeded => "action_succeeded",
    ActionRejected => "action_rejected",
    Starvation => "starvation",
    Blackout => "blackout",
    FireSpread => "fire_spread",
    FireBurnout => "fire_burnout",
    Collapse => "collapse",
    CollapseDamage => "collapse_damage",
    Exodus => "exodus",
    Crisis => "crisis",
    MinorEvent => "minor_event",
    DilemmaResolved => "dilemma_resolved",
});

/// How a renderer should present an entry. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Info,
    Good,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub year: u32,
    pub month: u32,
    pub kind: EventKind,
    pub tone: Tone,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y{}M{}: {}", self.year, self.month, self.message)
    }
}

/// Append-only log that evicts its oldest entry once full.
///
/// Observability only: nothing in the turn pipeline reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Entries of one kind, oldest first.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
