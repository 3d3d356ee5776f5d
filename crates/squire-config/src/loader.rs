use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::schema::SquireConfig;

/// Owns the loaded `squire.toml`. The pilot treats configuration as fixed
/// for the lifetime of the process: one load at startup, hard errors abort
/// right there, and the loop works from the resulting snapshot.
#[derive(Debug)]
pub struct ConfigLoader {
    config: Arc<RwLock<SquireConfig>>,
    source: PathBuf,
}

impl ConfigLoader {
    /// Where the config comes from. An explicit `--config` path wins, then
    /// the SQUIRE_CONFIG variable, then `~/.squire/squire.toml`.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("SQUIRE_CONFIG").map(PathBuf::from))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".squire")
                    .join("squire.toml")
            })
    }

    /// Read, fold in env overrides, and validate. A missing file is fine
    /// (defaults apply); a file that fails to parse or validate is not.
    pub fn load(path: Option<&Path>) -> squire_core::Result<Self> {
        let source = Self::resolve_path(path);
        let mut config = match std::fs::read_to_string(&source) {
            Ok(raw) => {
                debug!(path = %source.display(), "read squire.toml");
                toml::from_str::<SquireConfig>(&raw).map_err(|e| {
                    squire_core::SquireError::Config(format!(
                        "{} is not valid squire.toml: {e}",
                        source.display()
                    ))
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %source.display(), "no config file, running on defaults");
                SquireConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        override_from_env(&mut config);

        let warnings = config.validate().map_err(squire_core::SquireError::Config)?;
        for w in warnings {
            warn!("config: {w}");
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            source,
        })
    }

    /// Clone out the current snapshot.
    pub fn get(&self) -> SquireConfig {
        self.config.read().clone()
    }

    /// Shared handle for components that outlive the loader.
    pub fn shared(&self) -> Arc<RwLock<SquireConfig>> {
        Arc::clone(&self.config)
    }

    /// The file the configuration was resolved from.
    pub fn path(&self) -> &Path {
        &self.source
    }
}

/// Fold environment overrides into a parsed config. Plain values replace
/// what the file said; the archive credential only fills a gap, so a token
/// in the file beats one in the environment.
fn override_from_env(config: &mut SquireConfig) {
    if let Ok(v) = std::env::var("SQUIRE_TASK") {
        config.task.active = v;
    }
    if let Some(ms) = env_parse::<u64>("SQUIRE_TICK_INTERVAL_MS") {
        config.task.tick_interval_ms = ms;
    }
    if let Ok(v) = std::env::var("SQUIRE_EXECUTOR_URL") {
        config.executor.base_url = v;
    }
    if let Ok(v) = std::env::var("SQUIRE_LOG_LEVEL") {
        config.logging.level = v;
    }
    if config.archive.token.is_none() {
        config.archive.token = std::env::var("SQUIRE_ARCHIVE_TOKEN").ok();
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}
