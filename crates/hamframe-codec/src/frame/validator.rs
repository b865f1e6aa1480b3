use std::fmt;

use hamframe_core::{xor_fold, CHECKSUM_OFFSET, FRAME_LEN, PAYLOAD_OFFSET, SYNC_BYTE};

/// Outcome of validating one candidate frame.
/// Checked in declaration order: sync first, checksum second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeVerdict {
    /// Sync bytes missing or mismatched, window is most likely misaligned
    NoSync,
    /// Sync present but the trailer does not match the payload XOR
    WrongChecksum,
    /// Frame is valid
    Good,
}

impl DecodeVerdict {
    pub fn is_good(self) -> bool {
        self == DecodeVerdict::Good
    }
}

impl fmt::Display for DecodeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeVerdict::NoSync => write!(f, "no sync"),
            DecodeVerdict::WrongChecksum => write!(f, "wrong checksum"),
            DecodeVerdict::Good => write!(f, "good"),
        }
    }
}

/// XOR over the 12 payload bytes of a frame
pub fn compute_checksum(frame: &[u8]) -> u8 {
    xor_fold(&frame[PAYLOAD_OFFSET..CHECKSUM_OFFSET])
}

/// Classifies a decoded frame. Panics if `frame` is not exactly 15 bytes long.
pub fn validate(frame: &[u8]) -> DecodeVerdict {
    assert_eq!(
        frame.len(),
        FRAME_LEN,
        "validate: frame length {} does not match frame length {}",
        frame.len(),
        FRAME_LEN
    );

    if frame[0] != frame[1] || frame[0] != SYNC_BYTE {
        return DecodeVerdict::NoSync;
    }

    let checksum = compute_checksum(frame);
    if checksum != frame[CHECKSUM_OFFSET] {
        tracing::trace!("validate: checksum {:02x}, trailer {:02x}", checksum, frame[CHECKSUM_OFFSET]);
        return DecodeVerdict::WrongChecksum;
    }

    DecodeVerdict::Good
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::build_frame;

    #[test]
    fn test_good_frames() {
        for seed in 0..=255u8 {
            let payload: [u8; 12] = core::array::from_fn(|i| seed.wrapping_mul(31).wrapping_add(i as u8 * 17));
            assert_eq!(validate(&build_frame(&payload)), DecodeVerdict::Good);
        }
    }

    #[test]
    fn test_no_sync() {
        let mut frame = build_frame(&[0x12; 12]);
        frame[1] = 0xAB;
        assert_eq!(validate(&frame), DecodeVerdict::NoSync);

        // Both sync bytes equal but not 0xAA
        frame[0] = 0x55;
        frame[1] = 0x55;
        assert_eq!(validate(&frame), DecodeVerdict::NoSync);

        frame[0] = 0xAB;
        frame[1] = 0xAA;
        assert_eq!(validate(&frame), DecodeVerdict::NoSync);
    }

    #[test]
    fn test_no_sync_takes_priority_over_checksum() {
        let mut frame = build_frame(&[0x77; 12]);
        frame[0] = 0x00;
        frame[CHECKSUM_OFFSET] ^= 0xFF;
        assert_eq!(validate(&frame), DecodeVerdict::NoSync);
    }

    #[test]
    fn test_wrong_checksum() {
        let mut frame = build_frame(&[0x12; 12]);
        frame[CHECKSUM_OFFSET] ^= 0x01;
        assert_eq!(validate(&frame), DecodeVerdict::WrongChecksum);

        let mut frame = build_frame(&[0x12; 12]);
        frame[5] = 0x13;
        assert_eq!(validate(&frame), DecodeVerdict::WrongChecksum);
    }

    #[test]
    #[should_panic(expected = "does not match frame length")]
    fn test_validate_wrong_length() {
        validate(&[SYNC_BYTE; FRAME_LEN + 1]);
    }
}
