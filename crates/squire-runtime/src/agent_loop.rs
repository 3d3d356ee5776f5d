use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use squire_client::{ActionExecutor, HistoryArchive};
use squire_config::SquireConfig;
use squire_core::{
    ActionRequest, Event, EventKind, LoopState, Point, Result, SquireError, UiLayout,
};
use squire_memory::HistoryStore;
use squire_sensors::{Sample, SensorProvider};

use crate::learning;
use crate::narrator::Narrator;
use crate::phases;

/// Regions the overlay sweeps target.
const CLUE_REGION: &str = "id";
const ABILITY_REGION: &str = "clickers";
const CRAFT_REGION: &str = "r";

// Overlay payloads are canned stand-ins.
// TODO: route these through SensorProvider once a real capture adapter exists.
const CLUE_SOLUTION: &str = "Check inventory slot 1";
const NEXT_ABILITY: &str = "Surge";

/// The decision loop. Owns the sensors, the journal, and the collaborator
/// clients; everything runs on one task, one tick at a time.
pub struct AgentLoop {
    config: SquireConfig,
    layout: UiLayout,
    sensors: Box<dyn SensorProvider>,
    executor: Box<dyn ActionExecutor>,
    archive: Option<Box<dyn HistoryArchive>>,
    narrator: Box<dyn Narrator>,
    history: HistoryStore,
    cancel: CancellationToken,
    rng: StdRng,
    state: LoopState,
}

impl std::fmt::Debug for AgentLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentLoop").finish_non_exhaustive()
    }
}

impl AgentLoop {
    /// Build the loop. Fails only on configuration errors: a region table
    /// that is missing a region the active task targets is caught here, not
    /// mid-session.
    pub fn new(
        config: SquireConfig,
        sensors: Box<dyn SensorProvider>,
        executor: Box<dyn ActionExecutor>,
        archive: Option<Box<dyn HistoryArchive>>,
        narrator: Box<dyn Narrator>,
        cancel: CancellationToken,
    ) -> Result<Self> {
        let layout = config.ui.layout()?;
        for region in required_regions(&config) {
            if !layout.contains(&region) {
                return Err(SquireError::ConfigValidation {
                    field: "ui.regions".into(),
                    reason: format!(
                        "region '{}' required by task '{}' is not defined",
                        region, config.task.active
                    ),
                });
            }
        }

        let rng = match config.task.phase_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        if archive.is_none() {
            info!("journal export disabled");
        }

        Ok(Self {
            config,
            layout,
            sensors,
            executor,
            archive,
            narrator,
            history: HistoryStore::new(),
            cancel,
            rng,
            state: LoopState::Running,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Drive ticks until the session ends: a chat keyword (Terminated) or an
    /// external stop (Stopped).
    pub async fn run(&mut self) -> LoopState {
        self.narrator.narrate(&format!(
            "Session pilot started, task {}",
            self.config.task.active
        ));
        info!(task = %self.config.task.active, "pilot running");

        let interval = Duration::from_millis(self.config.task.tick_interval_ms);
        let cancel = self.cancel.clone();
        while self.state == LoopState::Running {
            if cancel.is_cancelled() {
                self.state = LoopState::Stopped;
                break;
            }
            self.tick().await;
            if self.state.is_terminal() {
                break;
            }
            tokio::select! {
                _ = cancel.cancelled() => {
                    self.state = LoopState::Stopped;
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }

        self.narrator.narrate("Session pilot stopped");
        info!(state = %self.state, events = self.history.len(), "pilot finished");
        self.state
    }

    /// Advance one decision cycle. The priority checks run in a fixed
    /// order; the first terminal condition wins the tick.
    pub async fn tick(&mut self) {
        // 1. Inventory pressure outranks everything else this tick.
        let count = self.read_inventory().await.into_value();
        if count >= self.config.sensors.inventory_full_threshold {
            self.narrator
                .narrate(&format!("Inventory full at {count}, requesting drop"));
            self.record(Event::new(EventKind::DropInventory, json!({ "count": count })));
            let coords = self.layout.region_or_default(&self.config.ui.drop_region);
            self.dispatch("Drop items", coords).await;
        }

        // 2. Chat tail. Every line goes into the journal; a monitored
        //    keyword ends the session.
        let message = self.read_chat().await.into_value();
        let keyword_hit = contains_keyword(&message, &self.config.sensors.chat_keywords);
        self.record(Event::new(EventKind::Chat, json!({ "message": message })));
        if keyword_hit {
            self.narrator.narrate("Chat requested logout, ending session");
            let coords = self.layout.default_point();
            self.dispatch("Logout", coords).await;
            self.state = LoopState::Terminated;
            self.finish_tick().await;
            return;
        }

        // 3. An AFK alert preempts task logic, not the checks above.
        if self.read_afk().await.into_value() {
            self.narrator.narrate("AFK alert detected, prompting action");
            let coords = self.layout.region_or_default(&self.config.ui.afk_region);
            self.dispatch("Click to resume", coords).await;
            self.finish_tick().await;
            return;
        }

        if self.cancel.is_cancelled() {
            self.state = LoopState::Stopped;
            return;
        }

        // 4. Overlay sweeps run every tick regardless of task.
        self.solve_clue().await;
        self.track_abilities().await;
        if self.config.task.active == phases::TIME_RUNE_TASK {
            self.craft_time_rune().await;
        }

        // 5. Executor suggestion, then the task's phase action.
        let suggestion = match self.executor.suggest(&self.config.task.active).await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                warn!(error = %e, "suggestion query failed");
                self.narrator.narrate("Failed to fetch next action");
                None
            }
        };
        if let Some(ref suggestion) = suggestion {
            self.record(Event::new(EventKind::Action, json!({ "data": suggestion })));
        }

        if let Some(k) = phases::phase_count(&self.config.task.active) {
            let phase = match self.config.task.phase {
                Some(pinned) => pinned,
                None => self.rng.random_range(1..=k),
            };
            self.narrator.narrate(&format!(
                "Handling {} phase {phase}",
                self.config.task.active
            ));
            let action = phases::resolve(&self.config.task.active, phase);
            let coords = self.layout.region_or_default(&action.region);
            self.dispatch(&action.label, coords).await;
            self.record(Event::new(
                EventKind::TelosPhase,
                json!({ "phase": phase, "action": action }),
            ));
        }

        // 6. Place the suggested action along its bar.
        if let Some(suggestion) = suggestion {
            let base = self.layout.region_or_default(&suggestion.bar);
            let coords = Point::new(
                base.x + suggestion.slot_index as i32 * self.config.ui.slot_width,
                base.y,
            );
            self.dispatch(&suggestion.action, coords).await;
        }

        // 7. Bookkeeping.
        self.finish_tick().await;
    }

    // ── Probes ─────────────────────────────────────────────────

    async fn read_inventory(&mut self) -> Sample<u32> {
        match self.sensors.sample_inventory().await {
            Ok(count) => Sample::Live(count),
            Err(e) => {
                warn!(error = %e, "inventory probe unavailable, assuming not full");
                self.narrator.narrate("Error reading inventory");
                Sample::Fallback(0)
            }
        }
    }

    async fn read_chat(&mut self) -> Sample<String> {
        match self.sensors.sample_chat().await {
            Ok(message) => Sample::Live(message),
            Err(e) => {
                warn!(error = %e, "chat probe unavailable, assuming quiet");
                self.narrator.narrate("Error reading chat");
                Sample::Fallback(String::new())
            }
        }
    }

    async fn read_afk(&mut self) -> Sample<bool> {
        match self.sensors.sample_afk().await {
            Ok(alert) => Sample::Live(alert),
            Err(e) => {
                warn!(error = %e, "afk probe unavailable, assuming active");
                self.narrator.narrate("Failed to monitor AFK");
                Sample::Fallback(false)
            }
        }
    }

    // ── Overlay sweeps ─────────────────────────────────────────

    async fn solve_clue(&mut self) {
        self.record(Event::new(
            EventKind::Clue,
            json!({ "solution": CLUE_SOLUTION }),
        ));
        let coords = self.layout.region_or_default(CLUE_REGION);
        self.dispatch(&format!("Solve clue: {CLUE_SOLUTION}"), coords)
            .await;
    }

    async fn track_abilities(&mut self) {
        self.record(Event::new(
            EventKind::Ability,
            json!({ "ability": NEXT_ABILITY }),
        ));
        let coords = self.layout.region_or_default(ABILITY_REGION);
        self.dispatch(&format!("Use ability: {NEXT_ABILITY}"), coords)
            .await;
    }

    async fn craft_time_rune(&mut self) {
        self.narrator.narrate("Crafting Time Rune");
        let coords = self.layout.region_or_default(CRAFT_REGION);
        self.dispatch("Craft Time Essence", coords).await;
        self.record(Event::new(
            EventKind::Crafting,
            json!({ "action": "Craft Time Essence", "slot_index": 0 }),
        ));
    }

    // ── Dispatch & journal ─────────────────────────────────────

    /// Send one action to the executor. A successful dispatch is journaled
    /// as a prompt; a failed one is logged and absorbed.
    async fn dispatch(&mut self, action: &str, coords: Point) {
        let request = ActionRequest {
            action: action.to_string(),
            coords,
        };
        match self.executor.dispatch(&request).await {
            Ok(()) => {
                self.narrator.narrate(&format!(
                    "Prompted {} at ({}, {})",
                    request.action, coords.x, coords.y
                ));
                self.record(Event::new(
                    EventKind::Prompt,
                    json!({ "action": request.action, "coords": request.coords }),
                ));
            }
            Err(e) => {
                warn!(error = %e, action = %request.action, "dispatch not acknowledged");
                self.narrator.narrate("Failed to prompt action");
            }
        }
    }

    fn record(&mut self, event: Event) {
        self.history.append(event);
    }

    /// End-of-tick bookkeeping: learner pass, then best-effort durable
    /// export. Runs even on short-circuited ticks.
    async fn finish_tick(&mut self) {
        if let Some(insight) = learning::infer(self.history.recent(2)) {
            info!(%insight, "adjacency insight");
            self.narrator.narrate(&format!("Learned: {insight}"));
        }
        self.export_journal().await;
    }

    async fn export_journal(&mut self) {
        let Some(archive) = self.archive.as_ref() else {
            return;
        };
        let blob = match self.history.export_snapshot() {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "journal serialization failed");
                return;
            }
        };
        match archive.store(&blob).await {
            Ok(()) => {
                debug!(events = self.history.len(), "journal exported");
                let cap = self.config.history.max_events;
                if cap > 0 {
                    let dropped = self.history.rotate(cap);
                    if dropped > 0 {
                        debug!(dropped, "journal rotated after export");
                    }
                }
            }
            Err(e) => warn!(error = %e, "journal export failed"),
        }
    }
}

/// Which regions the configured task can target, for the startup check.
fn required_regions(config: &SquireConfig) -> Vec<String> {
    let mut regions = vec![
        config.ui.default_region.clone(),
        config.ui.drop_region.clone(),
        config.ui.afk_region.clone(),
        CLUE_REGION.to_string(),
        ABILITY_REGION.to_string(),
    ];
    if config.task.active == phases::TIME_RUNE_TASK {
        regions.push(CRAFT_REGION.to_string());
    }
    for region in phases::referenced_regions(&config.task.active) {
        regions.push(region.to_string());
    }
    regions.sort();
    regions.dedup();
    regions
}

/// Case-insensitive substring containment over the monitored keyword set.
fn contains_keyword(message: &str, keywords: &[String]) -> bool {
    let lower = message.to_lowercase();
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}
