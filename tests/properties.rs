//! Property tests for decoding, the RTP heuristic, classification and counters

mod common;

use std::time::{Duration, Instant};

use common::{FrameBuilder, HOST, PEER};
use proptest::prelude::*;
use rtp_live_monitor::flow::{Classification, FlowClassifier, HostAddressSet, PortWindow};
use rtp_live_monitor::packet::{decode, looks_like_rtp, DecodeOutcome};
use rtp_live_monitor::stats::TrafficStats;
use rtp_live_monitor::ui::dashboard::level_bar;

fn classifier() -> FlowClassifier {
    FlowClassifier::new(PortWindow::default(), HostAddressSet::new([HOST]))
}

fn outside_window() -> impl Strategy<Value = u16> {
    prop_oneof![0u16..10_000, 65_001u16..=u16::MAX]
}

proptest! {
    #[test]
    fn prop_short_frames_are_too_short(frame in proptest::collection::vec(any::<u8>(), 0..14)) {
        prop_assert_eq!(decode(&frame), DecodeOutcome::TooShort);
    }

    #[test]
    fn prop_decode_never_panics(frame in proptest::collection::vec(any::<u8>(), 0..128)) {
        let _ = decode(&frame);
        let _ = classifier().classify_frame(&frame);
    }

    #[test]
    fn prop_non_ipv4_ethertype_is_skipped(ethertype in any::<u16>().prop_filter("not IPv4", |t| *t != 0x0800)) {
        let frame = FrameBuilder::rtp(PEER, HOST).ethertype(ethertype).build();
        prop_assert_eq!(decode(&frame), DecodeOutcome::NotIpv4);
        prop_assert_eq!(classifier().classify_frame(&frame), Classification::Ignored);
    }

    #[test]
    fn prop_ports_outside_window_ignored(src in outside_window(), dst in outside_window()) {
        let frame = FrameBuilder::rtp(PEER, HOST).ports(src, dst).build();
        prop_assert_eq!(classifier().classify_frame(&frame), Classification::Ignored);
    }

    #[test]
    fn prop_version_two_looks_like_rtp(
        low_bits in 0u8..0x40,
        rest in proptest::collection::vec(any::<u8>(), 11..64),
    ) {
        let mut payload = vec![0x80 | low_bits];
        payload.extend(rest);
        prop_assert!(looks_like_rtp(&payload));
    }

    #[test]
    fn prop_short_payload_never_rtp(payload in proptest::collection::vec(any::<u8>(), 0..12)) {
        prop_assert!(!looks_like_rtp(&payload));
    }

    #[test]
    fn prop_records_without_sample_keep_last(count in 1usize..500) {
        let mut stats = TrafficStats::new(Instant::now(), Duration::from_secs(1));
        let mut previous = 0;
        for _ in 0..count {
            stats.record(Classification::Inbound);
            prop_assert!(stats.rx() > previous);
            prop_assert_eq!(stats.last_rx(), 0);
            previous = stats.rx();
        }
    }

    #[test]
    fn prop_bar_length_is_capped(rate in any::<u64>()) {
        prop_assert_eq!(level_bar(rate).len() as u64, rate.min(50));
    }
}

#[test]
fn test_host_destination_decides_direction() {
    let to_host = FrameBuilder::rtp(PEER, HOST).build();
    let to_peer = FrameBuilder::rtp(HOST, PEER).build();

    assert_eq!(classifier().classify_frame(&to_host), Classification::Inbound);
    assert_eq!(classifier().classify_frame(&to_peer), Classification::Outbound);
}
