//! Simulated sensor provider.
//!
//! Stands in for real overlay capture: readings are pseudo-random draws
//! with the same distributions the capture layer is expected to produce.
//! Seedable so a session can be replayed.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::SensorProvider;
use squire_core::Result;

/// Odds that the simulated chat tail contains the logout keyword.
const CHAT_LOGOUT_ODDS: f64 = 0.2;

pub struct SimulatedSensors {
    rng: StdRng,
}

impl SimulatedSensors {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorProvider for SimulatedSensors {
    async fn sample_inventory(&mut self) -> Result<u32> {
        Ok(self.rng.random_range(0..30))
    }

    async fn sample_chat(&mut self) -> Result<String> {
        let message = if self.rng.random_bool(CHAT_LOGOUT_ODDS) {
            "logout"
        } else {
            "normal message"
        };
        Ok(message.to_string())
    }

    async fn sample_afk(&mut self) -> Result<bool> {
        Ok(self.rng.random_bool(0.5))
    }
}
