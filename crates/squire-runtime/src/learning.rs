//! Adjacency learner: inspects the two most recent journal entries for a
//! chat line immediately followed by a dispatched action and surfaces the
//! pairing. Advisory only — insights are narrated and logged, never fed
//! back into the loop's decisions.

use squire_core::{Event, EventKind};

/// A chat→action adjacency surfaced from the journal.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub chat: String,
    pub action: String,
}

impl std::fmt::Display for Insight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chat '{}' precedes '{}'", self.chat, self.action)
    }
}

/// Inspect the tail of the journal. Some iff the final two entries are a
/// chat observation followed by a dispatched prompt, in that order.
pub fn infer(recent: &[Event]) -> Option<Insight> {
    if recent.len() < 2 {
        return None;
    }
    let pair = &recent[recent.len() - 2..];
    if pair[0].kind != EventKind::Chat || pair[1].kind != EventKind::Prompt {
        return None;
    }
    let chat = pair[0]
        .payload
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    let action = pair[1]
        .payload
        .get("action")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    Some(Insight {
        chat: chat.to_string(),
        action: action.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chat(message: &str) -> Event {
        Event::new(EventKind::Chat, json!({ "message": message }))
    }

    fn prompt(action: &str) -> Event {
        Event::new(EventKind::Prompt, json!({ "action": action }))
    }

    #[test]
    fn test_none_under_two_events() {
        assert_eq!(infer(&[]), None);
        assert_eq!(infer(&[chat("hello")]), None);
    }

    #[test]
    fn test_chat_then_prompt_yields_insight() {
        let events = [chat("hello"), prompt("Click to resume")];
        let insight = infer(&events).unwrap();
        assert_eq!(insight.chat, "hello");
        assert_eq!(insight.action, "Click to resume");
    }

    #[test]
    fn test_wrong_order_yields_nothing() {
        assert_eq!(infer(&[prompt("Drop items"), chat("hello")]), None);
    }

    #[test]
    fn test_wrong_kinds_yield_nothing() {
        let events = [chat("hello"), Event::new(EventKind::Clue, json!({}))];
        assert_eq!(infer(&events), None);
        let events = [
            Event::new(EventKind::Ability, json!({})),
            prompt("Use ability: Surge"),
        ];
        assert_eq!(infer(&events), None);
    }

    #[test]
    fn test_only_the_last_two_matter() {
        let events = [prompt("Drop items"), chat("hello"), prompt("Logout")];
        let insight = infer(&events).unwrap();
        assert_eq!(insight.action, "Logout");
    }

    #[test]
    fn test_missing_payload_fields_degrade_to_unknown() {
        let events = [
            Event::new(EventKind::Chat, json!({})),
            Event::new(EventKind::Prompt, json!({})),
        ];
        let insight = infer(&events).unwrap();
        assert_eq!(insight.chat, "unknown");
        assert_eq!(insight.action, "unknown");
    }

    #[test]
    fn test_display() {
        let insight = Insight {
            chat: "hello".into(),
            action: "Logout".into(),
        };
        assert_eq!(insight.to_string(), "chat 'hello' precedes 'Logout'");
    }
}
