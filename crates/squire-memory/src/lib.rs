//! # squire-memory
//!
//! The session journal: an append-only, in-memory event log owned by the
//! decision loop. Recent-window queries feed the pattern learner; the full
//! journal is periodically exported as an opaque blob to the durable
//! archive. Single-writer by design — the loop is the only thread that
//! touches it, so no locking is needed here.

pub mod store;

pub use store::HistoryStore;
