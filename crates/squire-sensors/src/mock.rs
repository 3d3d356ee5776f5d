//! Scripted sensor provider for deterministic testing.
//!
//! Each probe pops from its own queue; an exhausted queue returns the
//! probe's quiet default (empty inventory, empty chat, no alert).

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::SensorProvider;
use squire_core::{Result, SquireError};

#[derive(Default)]
pub struct ScriptedSensors {
    inventory: VecDeque<Result<u32>>,
    chat: VecDeque<Result<String>>,
    afk: VecDeque<Result<bool>>,
}

impl ScriptedSensors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an inventory reading.
    pub fn with_inventory(mut self, count: u32) -> Self {
        self.inventory.push_back(Ok(count));
        self
    }

    /// Queue a chat reading.
    pub fn with_chat(mut self, message: &str) -> Self {
        self.chat.push_back(Ok(message.to_string()));
        self
    }

    /// Queue an AFK reading.
    pub fn with_afk(mut self, alert: bool) -> Self {
        self.afk.push_back(Ok(alert));
        self
    }

    /// Queue a failed inventory read.
    pub fn with_inventory_error(mut self, reason: &str) -> Self {
        self.inventory.push_back(Err(probe_error("inventory", reason)));
        self
    }

    /// Queue a failed chat read.
    pub fn with_chat_error(mut self, reason: &str) -> Self {
        self.chat.push_back(Err(probe_error("chat", reason)));
        self
    }

    /// Queue a failed AFK read.
    pub fn with_afk_error(mut self, reason: &str) -> Self {
        self.afk.push_back(Err(probe_error("afk", reason)));
        self
    }
}

fn probe_error(probe: &str, reason: &str) -> SquireError {
    SquireError::SensorUnavailable {
        probe: probe.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl SensorProvider for ScriptedSensors {
    async fn sample_inventory(&mut self) -> Result<u32> {
        self.inventory.pop_front().unwrap_or(Ok(0))
    }

    async fn sample_chat(&mut self) -> Result<String> {
        self.chat.pop_front().unwrap_or_else(|| Ok(String::new()))
    }

    async fn sample_afk(&mut self) -> Result<bool> {
        self.afk.pop_front().unwrap_or(Ok(false))
    }
}
