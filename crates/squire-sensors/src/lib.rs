//! # squire-sensors
//!
//! The sensor probe abstraction. The decision loop sees three probes —
//! inventory occupancy, the chat-log tail, and an AFK alert — behind the
//! [`SensorProvider`] trait. A production adapter would read the game
//! overlay; until one exists the [`SimulatedSensors`] provider stands in,
//! and [`ScriptedSensors`] gives tests deterministic readings.

pub mod mock;
pub mod simulated;

use async_trait::async_trait;
use squire_core::Result;

pub use mock::ScriptedSensors;
pub use simulated::SimulatedSensors;

/// Supplies the three session probes. Each call is a fresh read; a failed
/// read is reported as an error and the caller substitutes a safe default
/// rather than propagating it.
#[async_trait]
pub trait SensorProvider: Send {
    /// Occupied inventory slot count.
    async fn sample_inventory(&mut self) -> Result<u32>;

    /// The most recent chat line (empty when the log is quiet).
    async fn sample_chat(&mut self) -> Result<String>;

    /// Whether the AFK warden is currently alerting.
    async fn sample_afk(&mut self) -> Result<bool>;
}

/// Outcome of one probe read: the live value, or the safe fallback used
/// when the probe could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample<T> {
    Live(T),
    Fallback(T),
}

impl<T> Sample<T> {
    pub fn value(&self) -> &T {
        match self {
            Sample::Live(v) | Sample::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Sample::Live(v) | Sample::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sample::Fallback(_))
    }
}
