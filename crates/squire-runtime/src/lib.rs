//! # squire-runtime
//!
//! The decision loop — the single thread of control that watches the
//! session and drives the executor.
//!
//! ## Architecture
//!
//! ```text
//!              ┌──────────────┐
//!              │   Sensors     │  ← inventory, chat tail, AFK warden
//!              └──────┬────────┘
//!                     │ probe samples
//!                     ▼
//!              ┌──────────────┐
//!              │  Agent Loop  │  ← one tick per interval
//!              │              │
//!              │  1. Drop?    │  ← inventory pressure
//!              │  2. Logout?  │  ← chat keyword watch
//!              │  3. Resume?  │  ← AFK preemption
//!              │  4. Overlays │  ← clue / ability / crafting sweeps
//!              │  5. Phase    │  ← per-task phase table
//!              │  6. Suggest  │  ← executor's candidate action
//!              │  7. Journal  │  ← learner + durable export
//!              └──────┬───────┘
//!                     │ ActionRequest
//!                     ▼
//!              ┌──────────────┐
//!              │   Executor   │  ← POST /next-action
//!              └──────────────┘
//! ```
//!
//! Everything the loop touches degrades gracefully: a failed probe reads
//! as its quiet default, an unreachable executor is a no-op, a failed
//! export only delays the durable copy. The only fatal path is a
//! configuration error at startup.

pub mod agent_loop;
pub mod learning;
pub mod narrator;
pub mod phases;

pub use agent_loop::AgentLoop;
pub use learning::Insight;
pub use narrator::{LogNarrator, Narrator, SilentNarrator};
