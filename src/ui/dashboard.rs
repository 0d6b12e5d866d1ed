//! Dashboard renderer

use crate::constants::BAR_CAP;
use crate::stats::StatsSnapshot;
use crate::ui::screen::{DrawOp, Emphasis};

const LEFT: u16 = 2;

/// Gauge for a per-second rate, capped at `BAR_CAP` characters
pub fn level_bar(per_sec: u64) -> String {
    "#".repeat(per_sec.min(BAR_CAP) as usize)
}

/// Full redraw of the dashboard for one snapshot
pub fn render_dashboard(interface: &str, snapshot: &StatsSnapshot) -> Vec<DrawOp> {
    vec![
        DrawOp::new(0, LEFT, format!("RTP LIVE MONITOR ({interface}) - Press Q to Quit"))
            .with_emphasis(Emphasis::Bold),
        DrawOp::new(
            2,
            LEFT,
            format!("RX packets: {} (+{}/s)", snapshot.rx, snapshot.rx_per_sec),
        ),
        DrawOp::new(
            3,
            LEFT,
            format!("TX packets: {} (+{}/s)", snapshot.tx, snapshot.tx_per_sec),
        ),
        DrawOp::new(5, LEFT, format!("RX Level: {}", level_bar(snapshot.rx_per_sec))),
        DrawOp::new(6, LEFT, format!("TX Level: {}", level_bar(snapshot.tx_per_sec))),
        DrawOp::new(8, LEFT, format!("Direction: {}", snapshot.direction.arrow())),
    ]
}
