#[cfg(test)]
mod tests {
    use squire_core::*;
    use std::collections::HashMap;

    // ── Event tests ────────────────────────────────────────────

    #[test]
    fn test_event_kind_wire_names() {
        let cases = [
            (EventKind::Chat, "\"chat\""),
            (EventKind::Prompt, "\"prompt\""),
            (EventKind::Clue, "\"clue\""),
            (EventKind::Ability, "\"ability\""),
            (EventKind::Crafting, "\"crafting\""),
            (EventKind::TelosPhase, "\"telos_phase\""),
            (EventKind::DropInventory, "\"drop_inventory\""),
            (EventKind::Action, "\"action\""),
        ];
        for (kind, expected) in cases {
            assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        }
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::new(
            EventKind::Chat,
            serde_json::json!({"message": "normal message"}),
        );
        let json = serde_json::to_string(&event).unwrap();
        let restored: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.kind, EventKind::Chat);
        assert_eq!(restored.payload["message"], "normal message");
        assert_eq!(restored.timestamp, event.timestamp);
    }

    // ── UiLayout tests ─────────────────────────────────────────

    fn layout() -> UiLayout {
        let mut regions = HashMap::new();
        regions.insert("clickers".to_string(), Point::new(400, 600));
        regions.insert("id".to_string(), Point::new(1000, 300));
        UiLayout::new(regions, "clickers").unwrap()
    }

    #[test]
    fn test_layout_known_region() {
        let layout = layout();
        assert_eq!(layout.region("id"), Some(Point::new(1000, 300)));
    }

    #[test]
    fn test_layout_unknown_region_falls_back_to_default() {
        let layout = layout();
        assert_eq!(layout.region("nope"), None);
        assert_eq!(layout.region_or_default("nope"), Point::new(400, 600));
    }

    #[test]
    fn test_layout_rejects_missing_default() {
        let mut regions = HashMap::new();
        regions.insert("id".to_string(), Point::new(1, 2));
        let err = UiLayout::new(regions, "clickers").unwrap_err();
        assert!(err.to_string().contains("clickers"));
    }

    // ── Wire shape tests ───────────────────────────────────────

    #[test]
    fn test_action_request_wire_shape() {
        let request = ActionRequest {
            action: "Drop items".into(),
            coords: Point::new(1000, 300),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "Drop items", "coords": {"x": 1000, "y": 300}})
        );
    }

    #[test]
    fn test_suggestion_defaults_for_missing_fields() {
        let s: Suggestion = serde_json::from_str(r#"{"action": "Use Surge"}"#).unwrap();
        assert_eq!(s.action, "Use Surge");
        assert_eq!(s.bar, "");
        assert_eq!(s.slot_index, 0);
    }

    #[test]
    fn test_suggestion_full() {
        let s: Suggestion =
            serde_json::from_str(r#"{"action": "Use Surge", "bar": "clickers", "slot_index": 2}"#)
                .unwrap();
        assert_eq!(s.bar, "clickers");
        assert_eq!(s.slot_index, 2);
    }

    // ── LoopState tests ────────────────────────────────────────

    #[test]
    fn test_loop_state_terminal() {
        assert!(!LoopState::Running.is_terminal());
        assert!(LoopState::Terminated.is_terminal());
        assert!(LoopState::Stopped.is_terminal());
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = SquireError::SensorUnavailable {
            probe: "inventory".into(),
            reason: "capture offline".into(),
        };
        let s = err.to_string();
        assert!(s.contains("inventory"));
        assert!(s.contains("capture offline"));
    }

    #[test]
    fn test_error_archive_body_verbatim() {
        let err = SquireError::ArchiveRejected {
            status: 403,
            body: "{\"message\":\"Bad credentials\"}".into(),
        };
        assert!(err.to_string().contains("Bad credentials"));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SquireError = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }
}
