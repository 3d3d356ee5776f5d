use squire_core::{Event, Result};

/// The append-only session journal.
///
/// Insertion order is the only ordering guarantee; past entries are never
/// mutated. Timestamps are clamped on append so they are monotonically
/// non-decreasing in insertion order even if a caller stamps an event
/// before an earlier one was recorded.
#[derive(Debug, Default)]
pub struct HistoryStore {
    events: Vec<Event>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. O(1), never fails the caller.
    pub fn append(&mut self, mut event: Event) {
        if let Some(last) = self.events.last() {
            if event.timestamp < last.timestamp {
                event.timestamp = last.timestamp;
            }
        }
        self.events.push(event);
    }

    /// The last `n` events in insertion order (fewer if the journal is
    /// shorter).
    pub fn recent(&self, n: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize the full journal to an opaque blob for the durable
    /// archive. A pure read: two calls with no intervening append produce
    /// byte-identical output.
    pub fn export_snapshot(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.events)?)
    }

    /// Drop the oldest entries so at most `keep` remain. Returns how many
    /// were dropped. Only meant to run after a successful export — the
    /// in-memory journal is the sole local copy.
    pub fn rotate(&mut self, keep: usize) -> usize {
        if self.events.len() <= keep {
            return 0;
        }
        let dropped = self.events.len() - keep;
        self.events.drain(..dropped);
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use squire_core::EventKind;

    fn event(kind: EventKind) -> Event {
        Event::new(kind, serde_json::json!({}))
    }

    #[test]
    fn test_append_and_recent() {
        let mut store = HistoryStore::new();
        store.append(event(EventKind::Chat));
        store.append(event(EventKind::Prompt));
        store.append(event(EventKind::Clue));
        let recent = store.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].kind, EventKind::Prompt);
        assert_eq!(recent[1].kind, EventKind::Clue);
    }

    #[test]
    fn test_recent_shorter_than_requested() {
        let mut store = HistoryStore::new();
        store.append(event(EventKind::Chat));
        assert_eq!(store.recent(5).len(), 1);
        assert!(HistoryStore::new().recent(2).is_empty());
    }

    #[test]
    fn test_timestamps_clamped_monotonic() {
        let mut store = HistoryStore::new();
        let late = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2026, 1, 1, 11, 0, 0).unwrap();
        store.append(Event::at(EventKind::Chat, serde_json::json!({}), late));
        store.append(Event::at(EventKind::Prompt, serde_json::json!({}), early));
        let recent = store.recent(2);
        assert_eq!(recent[1].timestamp, late);
        assert!(recent[0].timestamp <= recent[1].timestamp);
    }

    #[test]
    fn test_export_idempotent() {
        let mut store = HistoryStore::new();
        store.append(event(EventKind::Chat));
        store.append(event(EventKind::Prompt));
        let a = store.export_snapshot().unwrap();
        let b = store.export_snapshot().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_export_reflects_appends() {
        let mut store = HistoryStore::new();
        store.append(event(EventKind::Chat));
        let a = store.export_snapshot().unwrap();
        store.append(event(EventKind::Prompt));
        let b = store.export_snapshot().unwrap();
        assert_ne!(a, b);
        let parsed: Vec<Event> = serde_json::from_slice(&b).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_rotate_keeps_newest() {
        let mut store = HistoryStore::new();
        for _ in 0..10 {
            store.append(event(EventKind::Chat));
        }
        store.append(event(EventKind::Prompt));
        let dropped = store.rotate(4);
        assert_eq!(dropped, 7);
        assert_eq!(store.len(), 4);
        assert_eq!(store.recent(4).last().unwrap().kind, EventKind::Prompt);
    }

    #[test]
    fn test_rotate_noop_when_under_cap() {
        let mut store = HistoryStore::new();
        store.append(event(EventKind::Chat));
        assert_eq!(store.rotate(4), 0);
        assert_eq!(store.len(), 1);
    }
}
