//! # squire-client
//!
//! HTTP adapters for the pilot's two network-facing collaborators:
//!
//! - the **action executor** (`POST /next-action` to dispatch, `GET
//!   /next-action?task=` to poll for a suggestion), and
//! - the **journal archive** (a bearer-guarded PUT of the full journal
//!   blob).
//!
//! Every call is best-effort from the loop's perspective: failures surface
//! as typed errors the loop logs and absorbs. Both collaborators also have
//! mock implementations for tests.

pub mod archive;
pub mod executor;
pub mod mock;

pub use archive::{HistoryArchive, HttpArchive};
pub use executor::{ActionExecutor, HttpExecutor};
pub use mock::{MockArchive, MockExecutor};
