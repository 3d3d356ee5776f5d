use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use squire_core::{Point, UiLayout};

/// Root configuration — maps to `squire.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SquireConfig {
    pub task: TaskConfig,
    pub sensors: SensorsConfig,
    pub ui: UiConfig,
    pub executor: ExecutorConfig,
    pub archive: ArchiveConfig,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

// ── Task ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Active task name, e.g. "Telos" (boss encounter) or "TimeRune"
    /// (crafting).
    pub active: String,
    /// Delay between ticks in milliseconds.
    pub tick_interval_ms: u64,
    /// Pin the encounter phase instead of drawing one each tick.
    pub phase: Option<u32>,
    /// Seed for the phase draw. Unset means seeded from the OS.
    pub phase_seed: Option<u64>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            active: "Telos".into(),
            tick_interval_ms: 1000,
            phase: None,
            phase_seed: None,
        }
    }
}

// ── Sensors ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    /// Sensor provider: "simulated" until a real capture adapter exists.
    pub provider: String,
    /// Seed for the simulated provider. Unset means seeded from the OS.
    pub seed: Option<u64>,
    /// Inventory slot count at which a drop is requested.
    pub inventory_full_threshold: u32,
    /// Chat substrings (matched case-insensitively) that end the session.
    pub chat_keywords: Vec<String>,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            provider: "simulated".into(),
            seed: None,
            inventory_full_threshold: 28,
            chat_keywords: vec!["logout".into(), "emergency".into()],
        }
    }
}

// ── UI ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Named region → screen coordinate table.
    pub regions: HashMap<String, Point>,
    /// Fallback region for unknown lookups. Must exist in `regions`.
    pub default_region: String,
    /// Region targeted by inventory drops.
    pub drop_region: String,
    /// Region targeted by AFK resume prompts.
    pub afk_region: String,
    /// Horizontal pixel stride between action-bar slots.
    pub slot_width: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        let mut regions = HashMap::new();
        regions.insert("clickers".to_string(), Point::new(400, 600));
        regions.insert("id".to_string(), Point::new(1000, 300));
        regions.insert("r".to_string(), Point::new(800, 400));
        Self {
            regions,
            default_region: "clickers".into(),
            drop_region: "id".into(),
            afk_region: "clickers".into(),
            slot_width: 50,
        }
    }
}

impl UiConfig {
    /// Build the immutable layout table used by the loop.
    pub fn layout(&self) -> squire_core::Result<UiLayout> {
        UiLayout::new(self.regions.clone(), self.default_region.clone())
    }
}

// ── Executor ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Base URL of the action executor.
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables the bound.
    pub timeout_secs: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            timeout_secs: 5,
        }
    }
}

// ── Archive ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Enable durable journal export.
    pub enabled: bool,
    /// Resource URL the journal blob is written to.
    pub url: String,
    /// Bearer credential. Can also be set via SQUIRE_ARCHIVE_TOKEN;
    /// the config file takes priority, env is the fallback. Absent
    /// credential disables export.
    pub token: Option<String>,
    /// Branch recorded with each write.
    pub branch: String,
    /// Message recorded with each write.
    pub commit_message: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: String::new(),
            token: None,
            branch: "main".into(),
            commit_message: "Update session journal".into(),
            timeout_secs: 10,
        }
    }
}

// ── History ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Journal entries kept in memory after a successful export.
    /// 0 disables rotation.
    pub max_events: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_events: 10_000 }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

// ── Default for root ───────────────────────────────────────────

impl Default for SquireConfig {
    fn default() -> Self {
        Self {
            task: TaskConfig::default(),
            sensors: SensorsConfig::default(),
            ui: UiConfig::default(),
            executor: ExecutorConfig::default(),
            archive: ArchiveConfig::default(),
            history: HistoryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// One finding from [`SquireConfig::validate`]. Errors abort startup;
/// warnings and notes are logged and the load proceeds.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl ConfigWarning {
    fn error(field: &str, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::tagged(field, message, WarningSeverity::Error, hint)
    }

    fn warning(field: &str, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::tagged(field, message, WarningSeverity::Warning, hint)
    }

    fn info(field: &str, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::tagged(field, message, WarningSeverity::Info, hint)
    }

    fn tagged(
        field: &str,
        message: impl Into<String>,
        severity: WarningSeverity,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            severity,
            hint: Some(hint.into()),
        }
    }
}

impl std::fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WarningSeverity::Error => "error",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Info => "note",
        })
    }
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.field, self.message)?;
        if let Some(ref hint) = self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl SquireConfig {
    /// Check the loaded values for nonsense. Findings come back for the
    /// caller to log; if any of them is an error, the set is folded into
    /// the returned message and the load must fail.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut findings = Vec::new();

        // ── Task ───
        if self.task.active.is_empty() {
            findings.push(ConfigWarning::error(
                "task.active",
                "no active task set",
                "set to e.g. 'Telos' or 'TimeRune'",
            ));
        }
        if self.task.tick_interval_ms == 0 {
            findings.push(ConfigWarning::error(
                "task.tick_interval_ms",
                "tick interval is 0 — the loop would spin without pause",
                "set to e.g. 1000",
            ));
        }
        if self.task.phase == Some(0) {
            findings.push(ConfigWarning::warning(
                "task.phase",
                "phase 0 is outside every phase table — the default action will fire each tick",
                "phases start at 1",
            ));
        }

        // ── Sensors ───
        const PROVIDERS: &[&str] = &["simulated"];
        if !PROVIDERS.contains(&self.sensors.provider.as_str()) {
            findings.push(ConfigWarning::error(
                "sensors.provider",
                format!("unknown sensor provider '{}'", self.sensors.provider),
                format!("valid values: {}", PROVIDERS.join(", ")),
            ));
        }
        if self.sensors.inventory_full_threshold == 0 {
            findings.push(ConfigWarning::warning(
                "sensors.inventory_full_threshold",
                "threshold is 0 — a drop would be requested every tick",
                "set to e.g. 28",
            ));
        }
        if self.sensors.chat_keywords.is_empty() {
            findings.push(ConfigWarning::warning(
                "sensors.chat_keywords",
                "no chat keywords — the session can only be stopped externally",
                "set to e.g. [\"logout\", \"emergency\"]",
            ));
        }

        // ── UI ───
        if self.ui.regions.is_empty() {
            findings.push(ConfigWarning::error(
                "ui.regions",
                "region table is empty",
                "define at least the default region",
            ));
        } else if !self.ui.regions.contains_key(&self.ui.default_region) {
            findings.push(ConfigWarning::error(
                "ui.default_region",
                format!(
                    "default region '{}' is not in the region table",
                    self.ui.default_region
                ),
                "every unknown lookup falls back to this region",
            ));
        }
        if self.ui.slot_width <= 0 {
            findings.push(ConfigWarning::warning(
                "ui.slot_width",
                format!("slot width {} — suggested actions will stack", self.ui.slot_width),
                "set to e.g. 50",
            ));
        }

        // ── Executor ───
        if self.executor.base_url.is_empty() {
            findings.push(ConfigWarning::error(
                "executor.base_url",
                "executor URL is empty",
                "set to e.g. 'http://localhost:8080'",
            ));
        }
        if self.executor.timeout_secs == 0 {
            findings.push(ConfigWarning::warning(
                "executor.timeout_secs",
                "no timeout — an unresponsive executor stalls the tick",
                "set to e.g. 5",
            ));
        }

        // ── Archive ───
        if self.archive.enabled && self.archive.url.is_empty() {
            findings.push(ConfigWarning::info(
                "archive.url",
                "archive enabled but no URL set — journal export stays off",
                "set archive.url, or archive.enabled = false to silence this",
            ));
        }

        // ── Logging ───
        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            findings.push(ConfigWarning::warning(
                "logging.level",
                format!("unknown log level '{}'", self.logging.level),
                format!("valid values: {}", LEVELS.join(", ")),
            ));
        }
        const FORMATS: &[&str] = &["pretty", "json", "compact"];
        if !FORMATS.contains(&self.logging.format.as_str()) {
            findings.push(ConfigWarning::warning(
                "logging.format",
                format!("unknown log format '{}'", self.logging.format),
                format!("valid values: {}", FORMATS.join(", ")),
            ));
        }

        let mut errors = findings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .peekable();
        if errors.peek().is_some() {
            let joined = errors
                .map(|w| format!("{}: {}", w.field, w.message))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(format!("invalid configuration: {joined}"));
        }

        Ok(findings)
    }
}
