//! Mock executor and archive for deterministic testing.
//!
//! Record every call without touching the network, in the builder style of
//! the other test doubles in this workspace.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::archive::HistoryArchive;
use crate::executor::ActionExecutor;
use squire_core::{ActionRequest, Result, SquireError, Suggestion};

/// An executor that records dispatches and replays queued suggestions.
#[derive(Default)]
pub struct MockExecutor {
    dispatched: Arc<Mutex<Vec<ActionRequest>>>,
    suggestions: Arc<Mutex<Vec<Option<Suggestion>>>>,
    fail_dispatch: bool,
    fail_suggest: bool,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a suggestion for the next `suggest` call.
    pub fn with_suggestion(self, action: &str, bar: &str, slot_index: u32) -> Self {
        self.suggestions.lock().unwrap().push(Some(Suggestion {
            action: action.to_string(),
            bar: bar.to_string(),
            slot_index,
        }));
        self
    }

    /// Queue an explicit "nothing to suggest" reply.
    pub fn with_no_suggestion(self) -> Self {
        self.suggestions.lock().unwrap().push(None);
        self
    }

    /// Make every dispatch fail as unreachable.
    pub fn with_failing_dispatch(mut self) -> Self {
        self.fail_dispatch = true;
        self
    }

    /// Make every suggestion query fail as unreachable.
    pub fn with_failing_suggest(mut self) -> Self {
        self.fail_suggest = true;
        self
    }

    /// Everything dispatched so far, in order.
    pub fn dispatched(&self) -> Vec<ActionRequest> {
        self.dispatched.lock().unwrap().clone()
    }

    /// Shared handle to the dispatch log, for doubles that outlive the loop.
    pub fn dispatch_log(&self) -> Arc<Mutex<Vec<ActionRequest>>> {
        Arc::clone(&self.dispatched)
    }
}

#[async_trait]
impl ActionExecutor for MockExecutor {
    async fn dispatch(&self, request: &ActionRequest) -> Result<()> {
        if self.fail_dispatch {
            return Err(SquireError::ExecutorUnreachable("mock offline".into()));
        }
        self.dispatched.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn suggest(&self, _task: &str) -> Result<Option<Suggestion>> {
        if self.fail_suggest {
            return Err(SquireError::ExecutorUnreachable("mock offline".into()));
        }
        let mut suggestions = self.suggestions.lock().unwrap();
        if suggestions.is_empty() {
            Ok(None)
        } else {
            Ok(suggestions.remove(0))
        }
    }
}

/// An archive that records stored blobs.
#[derive(Default)]
pub struct MockArchive {
    stored: Arc<Mutex<Vec<Vec<u8>>>>,
    fail: bool,
}

impl MockArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every store fail.
    pub fn with_failing_store(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Blobs stored so far, in order.
    pub fn stored(&self) -> Vec<Vec<u8>> {
        self.stored.lock().unwrap().clone()
    }

    /// Shared handle to the store log.
    pub fn store_log(&self) -> Arc<Mutex<Vec<Vec<u8>>>> {
        Arc::clone(&self.stored)
    }
}

#[async_trait]
impl HistoryArchive for MockArchive {
    async fn store(&self, snapshot: &[u8]) -> Result<()> {
        if self.fail {
            return Err(SquireError::ArchiveRejected {
                status: 500,
                body: "mock archive failure".into(),
            });
        }
        self.stored.lock().unwrap().push(snapshot.to_vec());
        Ok(())
    }
}
