//! RTP detection heuristic
//!
//! Only the version bits of the first byte are inspected. Any UDP payload of
//! at least 12 bytes whose first byte starts with `10` passes, so arbitrary
//! traffic will occasionally be counted. This is a "looks like RTP" test,
//! not protocol validation.

use crate::constants::{RTP_HEADER_LEN, RTP_VERSION};

/// Whether a UDP payload plausibly starts with an RTP header
#[inline]
pub fn looks_like_rtp(payload: &[u8]) -> bool {
    if payload.len() < RTP_HEADER_LEN {
        return false;
    }
    (payload[0] >> 6) & 0x03 == RTP_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_two_accepted() {
        let mut payload = [0u8; 12];
        payload[0] = 0x80;
        assert!(looks_like_rtp(&payload));

        // Padding, extension and CSRC bits don't matter
        payload[0] = 0xBF;
        assert!(looks_like_rtp(&payload));
    }

    #[test]
    fn test_other_versions_rejected() {
        for first in [0x00u8, 0x40, 0xC0, 0xFF] {
            let mut payload = [0u8; 20];
            payload[0] = first;
            assert!(!looks_like_rtp(&payload), "first byte {first:#04x}");
        }
    }

    #[test]
    fn test_short_payload_rejected() {
        assert!(!looks_like_rtp(&[]));
        assert!(!looks_like_rtp(&[0x80; 11]));
        assert!(looks_like_rtp(&[0x80; 12]));
    }
}
