use hamframe_core::{Frame, FRAME_LEN, RAW_FRAME_LEN};

use crate::hamming;

/// Decodes 30 raw codewords into a 15-byte frame.
/// Even codewords become the high nibble, odd codewords the low nibble of
/// byte `i / 2`. Panics if `window` is not exactly 30 bytes long.
pub fn assemble(window: &[u8]) -> Frame {
    assert_eq!(
        window.len(),
        RAW_FRAME_LEN,
        "assemble: window length {} does not match raw frame length {}",
        window.len(),
        RAW_FRAME_LEN
    );

    let mut frame = [0u8; FRAME_LEN];
    for (i, &codeword) in window.iter().enumerate() {
        let nibble = hamming::decode_nibble(codeword);
        if i % 2 == 0 {
            frame[i / 2] = nibble << 4;
        } else {
            frame[i / 2] |= nibble;
        }
    }
    tracing::trace!("assemble: {:02x?}", frame);
    frame
}
