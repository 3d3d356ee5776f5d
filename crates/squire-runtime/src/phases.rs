//! Per-task phase tables: a pure mapping from a discrete phase identifier
//! to the action that answers it. The loop selects the phase each tick;
//! nothing here keeps state between calls.

use squire_core::PhaseAction;

pub const TELOS_TASK: &str = "Telos";
pub const TIME_RUNE_TASK: &str = "TimeRune";

/// Number of phases for a phase-driven task. None for tasks without
/// phases.
pub fn phase_count(task: &str) -> Option<u32> {
    match task {
        TELOS_TASK => Some(3),
        _ => None,
    }
}

/// Resolve a (task, phase) pair to its action. Total: any pair outside the
/// known tables resolves to the same default action.
pub fn resolve(task: &str, phase: u32) -> PhaseAction {
    match (task, phase) {
        (TELOS_TASK, 1) => action("Activate Death Skulls", "clickers", 0),
        (TELOS_TASK, 2) => action("Clear virus", "id", 1),
        (TELOS_TASK, 3) => action("Dodge anima bomb", "clickers", 2),
        _ => action("Activate ability", "clickers", 0),
    }
}

/// Regions a task's phase table can target, for the startup layout check.
pub fn referenced_regions(task: &str) -> &'static [&'static str] {
    match task {
        TELOS_TASK => &["clickers", "id"],
        _ => &[],
    }
}

fn action(label: &str, region: &str, slot_index: u32) -> PhaseAction {
    PhaseAction {
        label: label.to_string(),
        region: region.to_string(),
        slot_index,
    }
}
