//! Fixed frame layout shared by encoder, decoder and synchronizer.
//!
//! ```text
//!  decoded frame (15 bytes)
//!  +------+------+---------------------------+----------+
//!  | 0xAA | 0xAA |   payload (12 bytes)      | checksum |
//!  +------+------+---------------------------+----------+
//!     0      1      2 ..................... 13     14
//! ```
//! Every decoded byte travels as two codewords (high nibble first), so a frame
//! occupies 30 raw bytes on the wire.

/// Sync value expected in both header bytes
pub const SYNC_BYTE: u8 = 0b1010_1010;
/// Number of sync bytes at the start of a frame
pub const SYNC_LEN: usize = 2;
/// Number of payload bytes carried by one frame
pub const PAYLOAD_LEN: usize = 12;
/// Offset of the first payload byte in a decoded frame
pub const PAYLOAD_OFFSET: usize = SYNC_LEN;
/// Offset of the XOR checksum byte in a decoded frame
pub const CHECKSUM_OFFSET: usize = PAYLOAD_OFFSET + PAYLOAD_LEN;
/// Decoded frame length in bytes
pub const FRAME_LEN: usize = CHECKSUM_OFFSET + 1;
/// Codewords per decoded byte
pub const CODEWORDS_PER_BYTE: usize = 2;
/// Raw (encoded) frame length in bytes
pub const RAW_FRAME_LEN: usize = FRAME_LEN * CODEWORDS_PER_BYTE;

/// A decoded 15-byte frame, including sync and checksum
pub type Frame = [u8; FRAME_LEN];
/// The 30 raw codewords that encode one frame
pub type RawWindow = [u8; RAW_FRAME_LEN];
/// The 12 payload bytes handed to the sink
pub type Payload = [u8; PAYLOAD_LEN];
