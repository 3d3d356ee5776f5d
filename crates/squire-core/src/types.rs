use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SquireError};

/// A screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The named UI region table, loaded once at startup and immutable after.
///
/// Lookups are closed-world: a region name that is not in the table falls
/// back to the designated default region, which is guaranteed to exist.
#[derive(Debug, Clone)]
pub struct UiLayout {
    regions: HashMap<String, Point>,
    default_region: String,
}

impl UiLayout {
    /// Build a layout. Fails if the default region is not in the table.
    pub fn new(regions: HashMap<String, Point>, default_region: impl Into<String>) -> Result<Self> {
        let default_region = default_region.into();
        if !regions.contains_key(&default_region) {
            return Err(SquireError::UnknownRegion(default_region));
        }
        Ok(Self {
            regions,
            default_region,
        })
    }

    pub fn region(&self, name: &str) -> Option<Point> {
        self.regions.get(name).copied()
    }

    /// Coordinate of `name`, or of the default region when `name` is absent.
    pub fn region_or_default(&self, name: &str) -> Point {
        self.region(name)
            .unwrap_or_else(|| self.default_point())
    }

    pub fn default_point(&self) -> Point {
        // The constructor guarantees the default region exists.
        self.regions[&self.default_region]
    }

    pub fn default_region(&self) -> &str {
        &self.default_region
    }

    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }
}

/// A concrete action derived from a (task, phase) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseAction {
    pub label: String,
    /// Named UI region the action targets.
    pub region: String,
    pub slot_index: u32,
}

/// The wire unit sent to the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    pub coords: Point,
}

/// A candidate next action returned by the executor's query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub action: String,
    /// Named bar region to anchor the action at. Empty means "use the
    /// default region".
    #[serde(default)]
    pub bar: String,
    #[serde(default)]
    pub slot_index: u32,
}

/// Lifecycle of the decision loop. Terminated (chat keyword) and Stopped
/// (external signal) are both terminal — there is no resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    Running,
    Terminated,
    Stopped,
}

impl LoopState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoopState::Running)
    }
}

impl std::fmt::Display for LoopState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoopState::Running => "running",
            LoopState::Terminated => "terminated",
            LoopState::Stopped => "stopped",
        };
        write!(f, "{s}")
    }
}
