use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of entries in the session journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A chat line observed in the session.
    Chat,
    /// An action dispatched to the executor.
    Prompt,
    /// A clue-solver overlay sweep.
    Clue,
    /// An ability-tracker overlay sweep.
    Ability,
    /// A crafting step.
    Crafting,
    /// A boss-encounter phase action.
    TelosPhase,
    /// An inventory drop request.
    DropInventory,
    /// A suggestion received from the executor.
    Action,
}

/// One entry in the session journal. Entries are append-only and owned
/// exclusively by the history store; insertion order is the only ordering
/// guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// Kind-specific payload (message, coords, phase, ...).
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl Event {
    /// Create an event stamped with the current time.
    pub fn new(kind: EventKind, payload: serde_json::Value) -> Self {
        Self::at(kind, payload, Utc::now())
    }

    /// Create an event with an explicit capture time.
    pub fn at(kind: EventKind, payload: serde_json::Value, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            payload,
            timestamp,
        }
    }
}
