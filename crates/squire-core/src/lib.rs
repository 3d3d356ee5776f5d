//! # squire-core
//!
//! Core types, traits, and primitives for the Squire session pilot.
//! This crate defines the shared vocabulary used by every other crate in the
//! workspace.

pub mod error;
pub mod event;
pub mod types;

pub use error::{Result, SquireError};
pub use event::{Event, EventKind};
pub use types::*;
