//! RTP Live Monitor
//!
//! Picks an interface (interactively unless `--interface` is given), then
//! shows live RTP packet rates on it until `q` is pressed.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rtp_live_monitor::{
    capture::list_interfaces,
    config::{default_log_path, AppConfig},
    logging, monitor,
    ui::{pick_interface, TerminalScreen},
};

/// Live terminal dashboard of RTP traffic on one network interface
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Interface to monitor (skips the interactive picker)
    #[arg(short, long, env = "RTP_MONITOR_INTERFACE")]
    interface: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "RTP_MONITOR_CONFIG")]
    config: Option<PathBuf>,

    /// Log file path (overrides config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    let log_file = args
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .or_else(default_log_path)
        .unwrap_or_else(|| PathBuf::from("rtp-monitor.log"));
    let _log_guard = logging::init_file_logging(&log_file, &config.logging.level)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    tracing::info!("Starting RTP Live Monitor");

    let shutdown = Arc::new(AtomicBool::new(false));
    tokio::spawn(watch_signals(shutdown.clone()));

    let interface = args.interface;
    let session = tokio::task::spawn_blocking(move || run_session(&config, interface, &shutdown))
        .await
        .context("Monitor session panicked")?;

    if let Err(e) = &session {
        tracing::error!("{:#}", e);
    }
    session
}

/// Picker, startup checks and capture loop, all on one blocking thread
fn run_session(config: &AppConfig, interface: Option<String>, shutdown: &AtomicBool) -> Result<()> {
    let mut screen = TerminalScreen::new().context("Failed to set up terminal")?;

    let interface = match interface {
        Some(name) => Some(name),
        None => {
            let interfaces = list_interfaces().context("Failed to list network interfaces")?;
            pick_interface(&mut screen, interfaces, shutdown)?
        }
    };

    let Some(interface) = interface.filter(|name| !name.is_empty()) else {
        tracing::info!("No interface selected");
        return Ok(());
    };

    let (mut session, source) = monitor::prepare(&interface, config)
        .with_context(|| format!("Failed to start monitoring {interface} (root or CAP_NET_RAW required)"))?;
    session.run(source, &mut screen, shutdown)?;

    Ok(())
}

/// Raise the shutdown flag on SIGINT, SIGTERM or SIGHUP
async fn watch_signals(shutdown: Arc<AtomicBool>) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (Ok(mut terminate), Ok(mut hangup)) =
            (signal(SignalKind::terminate()), signal(SignalKind::hangup()))
        else {
            tracing::warn!("Failed to install signal handlers");
            return;
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
            _ = hangup.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::warn!("Failed to install Ctrl+C handler");
            return;
        }
    }

    tracing::info!("Shutdown signal received");
    shutdown.store(true, Ordering::Relaxed);
}
