//! Frame assembly, validation and construction.
//!
//! Receive path: 30 raw codewords -> [`assemble`] -> 15-byte frame -> [`validate`].
//! Transmit path: 12-byte payload -> [`build_frame`] -> [`encode_frame`] -> 30 raw codewords.

pub mod assembler;
pub mod validator;

pub use assembler::assemble;
pub use validator::{compute_checksum, validate, DecodeVerdict};

use hamframe_core::{Frame, Payload, RawWindow, CHECKSUM_OFFSET, FRAME_LEN, PAYLOAD_LEN, PAYLOAD_OFFSET, RAW_FRAME_LEN, SYNC_BYTE, SYNC_LEN};

use crate::hamming;

/// Builds a decoded frame around `payload`: sync header, payload, XOR trailer
pub fn build_frame(payload: &Payload) -> Frame {
    let mut frame = [0u8; FRAME_LEN];
    frame[..SYNC_LEN].fill(SYNC_BYTE);
    frame[PAYLOAD_OFFSET..CHECKSUM_OFFSET].copy_from_slice(payload);
    frame[CHECKSUM_OFFSET] = compute_checksum(&frame);
    frame
}

/// Builds and encodes a frame into the 30 codewords sent on the wire
pub fn encode_frame(payload: &Payload) -> RawWindow {
    let frame = build_frame(payload);
    let mut raw = [0u8; RAW_FRAME_LEN];
    for (i, &b) in frame.iter().enumerate() {
        raw[2 * i] = hamming::encode_nibble(b >> 4);
        raw[2 * i + 1] = hamming::encode_nibble(b & 0x0F);
    }
    raw
}

/// Returns the payload bytes (2..14) of a decoded frame
pub fn payload_of(frame: &Frame) -> Payload {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&frame[PAYLOAD_OFFSET..CHECKSUM_OFFSET]);
    payload
}
