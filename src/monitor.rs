//! Capture loop
//!
//! Owns the classifier and the counters, pulls frames from a `FrameSource`
//! one at a time and redraws the dashboard on every sampling tick. The read
//! timeout is the only place the loop waits, so quitting takes at most one
//! timeout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::capture::{resolve_host_addresses, FrameSource, RawCapture, ReadOutcome};
use crate::config::AppConfig;
use crate::error::{Result, ScreenError};
use crate::flow::{Classification, FlowClassifier};
use crate::stats::{StatsSnapshot, TrafficStats};
use crate::ui::{draw, render_dashboard, Screen};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `q`, `Q` or Ctrl+C
    QuitKey,
    /// External shutdown request
    Shutdown,
}

/// Totals reported when the loop terminates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rx: u64,
    pub tx: u64,
    /// Frames read, whether counted or not
    pub frames: u64,
    /// Read errors skipped over
    pub read_errors: u64,
    pub exit: ExitReason,
}

/// Validate `config`, resolve the host's addresses and open a capture on
/// `interface`
pub fn prepare(interface: &str, config: &AppConfig) -> Result<(Monitor, RawCapture)> {
    config.validate()?;

    let hosts = resolve_host_addresses(interface)?;
    if hosts.is_empty() {
        tracing::warn!("{} has no IPv4 address; all RTP will count as outbound", interface);
    }

    let source = RawCapture::open(
        interface,
        config.capture.read_timeout(),
        config.capture.snap_len,
    )?;

    let classifier = FlowClassifier::new(config.filter.window(), hosts);
    tracing::info!(
        "Counting RTP on ports {:?} for {} host address(es)",
        classifier.window().range(),
        classifier.hosts().len()
    );

    Ok((Monitor::new(classifier, config.dashboard.sample_interval()), source))
}

/// Classification and aggregation state for one capture session
pub struct Monitor {
    classifier: FlowClassifier,
    stats: TrafficStats,
    frames: u64,
    read_errors: u64,
}

impl Monitor {
    /// Start a session; the first dashboard tick is one `sample_interval` away
    pub fn new(classifier: FlowClassifier, sample_interval: Duration) -> Self {
        Self::with_stats(classifier, TrafficStats::new(Instant::now(), sample_interval))
    }

    pub fn with_stats(classifier: FlowClassifier, stats: TrafficStats) -> Self {
        Self {
            classifier,
            stats,
            frames: 0,
            read_errors: 0,
        }
    }

    pub fn stats(&self) -> &TrafficStats {
        &self.stats
    }

    /// Run one frame through decode, heuristic, classification and counting
    pub fn process_frame(&mut self, frame: &[u8]) -> Classification {
        self.frames += 1;
        let outcome = self.classifier.classify_frame(frame);
        self.stats.record(outcome);
        outcome
    }

    /// Redraw the dashboard if a sampling tick is due at `now`
    pub fn tick<S: Screen + ?Sized>(
        &mut self,
        interface: &str,
        screen: &mut S,
        now: Instant,
    ) -> std::result::Result<Option<StatsSnapshot>, ScreenError> {
        let Some(snapshot) = self.stats.sample(now) else {
            return Ok(None);
        };

        tracing::trace!(
            "Tick: rx {} (+{}/s), tx {} (+{}/s)",
            snapshot.rx,
            snapshot.rx_per_sec,
            snapshot.tx,
            snapshot.tx_per_sec
        );
        draw(screen, &render_dashboard(interface, &snapshot))?;
        Ok(Some(snapshot))
    }

    /// Drive the dashboard until a quit key or `shutdown`
    ///
    /// The source is consumed and closed on every exit path.
    pub fn run<F, S>(&mut self, source: F, screen: &mut S, shutdown: &AtomicBool) -> Result<RunSummary>
    where
        F: FrameSource,
        S: Screen + ?Sized,
    {
        self.run_with_clock(source, screen, shutdown, Instant::now)
    }

    /// Same as [`Monitor::run`], reading the time for each tick from `clock`
    pub fn run_with_clock<F, S, C>(
        &mut self,
        mut source: F,
        screen: &mut S,
        shutdown: &AtomicBool,
        mut clock: C,
    ) -> Result<RunSummary>
    where
        F: FrameSource,
        S: Screen + ?Sized,
        C: FnMut() -> Instant,
    {
        let interface = source.interface().to_string();
        tracing::info!(
            "Monitoring RTP on {} (sampling every {:?})",
            interface,
            self.stats.interval()
        );

        let exit = loop {
            if shutdown.load(Ordering::Relaxed) {
                break ExitReason::Shutdown;
            }

            match source.read_frame() {
                Ok(ReadOutcome::Frame(frame)) => {
                    self.process_frame(frame);
                }
                Ok(ReadOutcome::Timeout) => {}
                Err(e) => {
                    self.read_errors += 1;
                    tracing::debug!("Skipping read error on {}: {}", interface, e);
                }
            }

            self.tick(&interface, screen, clock())?;

            if let Some(key) = screen.poll_key()? {
                if key.is_quit() {
                    break ExitReason::QuitKey;
                }
            }
        };

        drop(source);

        let summary = RunSummary {
            rx: self.stats.rx(),
            tx: self.stats.tx(),
            frames: self.frames,
            read_errors: self.read_errors,
            exit,
        };
        tracing::info!(
            "Monitor stopped ({:?}): {} frames, {} rx, {} tx, {} read errors",
            summary.exit,
            summary.frames,
            summary.rx,
            summary.tx,
            summary.read_errors
        );
        Ok(summary)
    }
}
