#[cfg(test)]
mod tests {
    use squire_config::ConfigLoader;
    use squire_config::schema::*;
    use std::io::Write;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_task_config_defaults() {
        let config = SquireConfig::default();
        assert_eq!(config.task.active, "Telos");
        assert_eq!(config.task.tick_interval_ms, 1000);
        assert!(config.task.phase.is_none());
    }

    #[test]
    fn test_sensors_config_defaults() {
        let config = SensorsConfig::default();
        assert_eq!(config.provider, "simulated");
        assert_eq!(config.inventory_full_threshold, 28);
        assert_eq!(config.chat_keywords, vec!["logout", "emergency"]);
    }

    #[test]
    fn test_ui_config_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.default_region, "clickers");
        assert_eq!(config.drop_region, "id");
        assert_eq!(config.afk_region, "clickers");
        assert_eq!(config.slot_width, 50);
        let clickers = config.regions.get("clickers").unwrap();
        assert_eq!((clickers.x, clickers.y), (400, 600));
        let id = config.regions.get("id").unwrap();
        assert_eq!((id.x, id.y), (1000, 300));
        let r = config.regions.get("r").unwrap();
        assert_eq!((r.x, r.y), (800, 400));
    }

    #[test]
    fn test_executor_config_defaults() {
        let config = ExecutorConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_archive_config_defaults() {
        let config = ArchiveConfig::default();
        assert!(config.enabled);
        assert!(config.url.is_empty());
        assert!(config.token.is_none());
        assert_eq!(config.branch, "main");
    }

    // ── Parse tests ────────────────────────────────────────────

    #[test]
    fn test_parse_partial_toml_keeps_defaults() {
        let raw = r#"
            [task]
            active = "TimeRune"
            tick_interval_ms = 250

            [executor]
            base_url = "http://10.0.0.7:8080"
        "#;
        let config: SquireConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.task.active, "TimeRune");
        assert_eq!(config.task.tick_interval_ms, 250);
        assert_eq!(config.executor.base_url, "http://10.0.0.7:8080");
        // Untouched sections keep their defaults
        assert_eq!(config.sensors.inventory_full_threshold, 28);
        assert!(config.ui.regions.contains_key("clickers"));
    }

    #[test]
    fn test_parse_region_table() {
        let raw = r#"
            [ui]
            default_region = "hud"

            [ui.regions]
            hud = { x = 10, y = 20 }
        "#;
        let config: SquireConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.ui.default_region, "hud");
        let hud = config.ui.regions.get("hud").unwrap();
        assert_eq!((hud.x, hud.y), (10, 20));
    }

    #[test]
    fn test_layout_from_ui_config() {
        let config = UiConfig::default();
        let layout = config.layout().unwrap();
        assert_eq!(layout.default_region(), "clickers");
        assert!(layout.contains("r"));
    }

    // ── Validation tests ───────────────────────────────────────

    #[test]
    fn test_validate_defaults_have_no_errors() {
        let config = SquireConfig::default();
        let warnings = config.validate().unwrap();
        // Defaults warn about the unset archive URL, nothing else is wrong
        assert!(
            warnings
                .iter()
                .all(|w| w.severity != WarningSeverity::Error)
        );
    }

    #[test]
    fn test_validate_rejects_zero_tick_interval() {
        let mut config = SquireConfig::default();
        config.task.tick_interval_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("tick_interval_ms"));
    }

    #[test]
    fn test_validate_rejects_missing_default_region() {
        let mut config = SquireConfig::default();
        config.ui.default_region = "nowhere".into();
        let err = config.validate().unwrap_err();
        assert!(err.contains("default_region"));
    }

    #[test]
    fn test_validate_rejects_empty_executor_url() {
        let mut config = SquireConfig::default();
        config.executor.base_url = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.contains("executor.base_url"));
    }

    #[test]
    fn test_validate_rejects_unknown_provider() {
        let mut config = SquireConfig::default();
        config.sensors.provider = "telepathy".into();
        let err = config.validate().unwrap_err();
        assert!(err.contains("sensors.provider"));
    }

    #[test]
    fn test_validate_warns_on_empty_keywords() {
        let mut config = SquireConfig::default();
        config.sensors.chat_keywords.clear();
        let warnings = config.validate().unwrap();
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "sensors.chat_keywords"
                    && w.severity == WarningSeverity::Warning)
        );
    }

    #[test]
    fn test_warning_display_names_severity_field_and_hint() {
        let mut config = SquireConfig::default();
        config.sensors.chat_keywords.clear();
        let warnings = config.validate().unwrap();
        let line = warnings
            .iter()
            .find(|w| w.field == "sensors.chat_keywords")
            .unwrap()
            .to_string();
        assert!(line.starts_with("[warning] sensors.chat_keywords:"));
        assert!(line.contains("(hint:"));
    }

    // ── Loader tests ───────────────────────────────────────────

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("squire.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "[task]\nactive = \"TimeRune\"\n\n[sensors]\ninventory_full_threshold = 20"
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(&path)).unwrap();
        let config = loader.get();
        assert_eq!(config.task.active, "TimeRune");
        assert_eq!(config.sensors.inventory_full_threshold, 20);
        assert_eq!(loader.path(), path);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("squire.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[executor]\nbase_url = \"\"").unwrap();

        let err = ConfigLoader::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("executor.base_url"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let loader = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.get().task.active, "Telos");
    }
}
