use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use squire_client::{ActionExecutor, HistoryArchive, HttpArchive, HttpExecutor};
use squire_config::ConfigLoader;
use squire_config::schema::{ArchiveConfig, LoggingConfig};
use squire_core::LoopState;
use squire_runtime::{AgentLoop, LogNarrator};
use squire_sensors::{SensorProvider, SimulatedSensors};

#[derive(Parser)]
#[command(name = "squire", version, about = "Overlay companion pilot for live game sessions")]
struct Cli {
    /// Path to squire.toml (defaults to ~/.squire/squire.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("squire: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> squire_core::Result<()> {
    let loader = ConfigLoader::load(cli.config.as_deref())?;
    let config = loader.get();
    init_tracing(&config.logging);

    println!("🛡 Squire v{}", env!("CARGO_PKG_VERSION"));
    println!("   Task: {}", config.task.active);
    println!("   Executor: {}", config.executor.base_url);
    println!();

    let sensors: Box<dyn SensorProvider> = match config.sensors.provider.as_str() {
        "simulated" => Box::new(match config.sensors.seed {
            Some(seed) => SimulatedSensors::seeded(seed),
            None => SimulatedSensors::new(),
        }),
        other => {
            // validate() rejects unknown providers before we get here
            return Err(squire_core::SquireError::Config(format!(
                "unknown sensor provider '{other}'"
            )));
        }
    };

    let executor: Box<dyn ActionExecutor> = Box::new(HttpExecutor::new(
        &config.executor.base_url,
        Duration::from_secs(config.executor.timeout_secs),
    )?);

    let archive = build_archive(&config.archive)?;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("stop requested, finishing the current tick");
                cancel.cancel();
            }
        });
    }

    let mut pilot = AgentLoop::new(
        config,
        sensors,
        executor,
        archive,
        Box::new(LogNarrator),
        cancel,
    )?;

    match pilot.run().await {
        LoopState::Terminated => println!("   Session ended by chat request"),
        LoopState::Stopped => println!("   Session stopped"),
        LoopState::Running => {}
    }

    Ok(())
}

/// Wire the durable journal archive, or disable it when unconfigured.
fn build_archive(config: &ArchiveConfig) -> squire_core::Result<Option<Box<dyn HistoryArchive>>> {
    if !config.enabled {
        info!("journal export disabled by config");
        return Ok(None);
    }
    if config.url.is_empty() {
        warn!("journal export disabled: no archive URL configured");
        return Ok(None);
    }
    let Some(ref token) = config.token else {
        warn!("journal export disabled: no archive credential set");
        return Ok(None);
    };
    let archive = HttpArchive::new(
        &config.url,
        token,
        &config.branch,
        &config.commit_message,
        Duration::from_secs(config.timeout_secs),
    )?;
    Ok(Some(Box::new(archive)))
}

fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }
}
