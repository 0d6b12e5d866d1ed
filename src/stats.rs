//! Packet counters and per-second rates
//!
//! `TrafficStats` is owned by the capture loop. Frames fold into the
//! cumulative counters through `record`; `sample` turns them into deltas once
//! per sampling interval, independent of how many frames arrive.

use std::time::{Duration, Instant};

use crate::flow::Classification;

/// Which way most RTP went during the last interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// Ties resolve to outbound
    pub fn from_rates(rx_per_sec: u64, tx_per_sec: u64) -> Self {
        if rx_per_sec > tx_per_sec {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Inbound => "<--",
            Direction::Outbound => "-->",
        }
    }
}

/// Immutable view of the counters at one sampling tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub rx: u64,
    pub tx: u64,
    pub rx_per_sec: u64,
    pub tx_per_sec: u64,
    pub direction: Direction,
}

/// Cumulative counters plus the values seen at the previous tick
#[derive(Debug, Clone)]
pub struct TrafficStats {
    rx: u64,
    tx: u64,
    last_rx: u64,
    last_tx: u64,
    last_tick: Instant,
    interval: Duration,
}

impl TrafficStats {
    /// Start counting; the first tick is due one `interval` after `now`
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self {
            rx: 0,
            tx: 0,
            last_rx: 0,
            last_tx: 0,
            last_tick: now,
            interval,
        }
    }

    /// Fold one classified frame into the counters
    #[inline]
    pub fn record(&mut self, outcome: Classification) {
        match outcome {
            Classification::Inbound => self.rx += 1,
            Classification::Outbound => self.tx += 1,
            Classification::Ignored => {}
        }
    }

    /// Produce a snapshot if a sampling interval has elapsed since the last one
    pub fn sample(&mut self, now: Instant) -> Option<StatsSnapshot> {
        if now.saturating_duration_since(self.last_tick) < self.interval {
            return None;
        }

        let rx_per_sec = self.rx - self.last_rx;
        let tx_per_sec = self.tx - self.last_tx;
        self.last_rx = self.rx;
        self.last_tx = self.tx;
        self.last_tick = now;

        Some(StatsSnapshot {
            rx: self.rx,
            tx: self.tx,
            rx_per_sec,
            tx_per_sec,
            direction: Direction::from_rates(rx_per_sec, tx_per_sec),
        })
    }

    pub fn rx(&self) -> u64 {
        self.rx
    }

    pub fn tx(&self) -> u64 {
        self.tx
    }

    pub fn last_rx(&self) -> u64 {
        self.last_rx
    }

    pub fn last_tx(&self) -> u64 {
        self.last_tx
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
