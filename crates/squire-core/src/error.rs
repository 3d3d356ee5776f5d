use thiserror::Error;

/// Unified error type for the entire Squire pilot.
#[derive(Error, Debug)]
pub enum SquireError {
    // ── Sensor errors ──────────────────────────────────────────
    #[error("sensor unavailable: {probe}: {reason}")]
    SensorUnavailable { probe: String, reason: String },

    // ── Executor errors ────────────────────────────────────────
    #[error("executor unreachable: {0}")]
    ExecutorUnreachable(String),

    #[error("executor rejected dispatch: status {status}")]
    DispatchRejected { status: u16 },

    // ── Archive errors ─────────────────────────────────────────
    #[error("archive unreachable: {0}")]
    ArchiveUnreachable(String),

    #[error("archive rejected write: status {status}: {body}")]
    ArchiveRejected { status: u16, body: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    #[error("unknown ui region: {0}")]
    UnknownRegion(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SquireError>;
