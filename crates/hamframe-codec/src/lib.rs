//! Hamming(8,4) framed stream decoder
//!
//! Pipeline, bottom to top:
//! - [`hamming`]: corrects and decodes one codeword into a nibble
//! - [`frame`]: packs 30 nibbles into a 15-byte frame and validates sync and checksum
//! - [`sync`]: slides a 30-byte window over the raw stream until frames validate
//! - [`io`]: byte source and payload sink collaborators
//! - [`channel`]: noisy link model used to produce test streams

pub mod channel;
pub mod frame;
pub mod hamming;
pub mod io;
pub mod sync;

// Re-export commonly used items
pub use frame::{assemble, validate, DecodeVerdict};
pub use hamming::decode_nibble;
pub use sync::{Attempt, StreamSynchronizer, SyncObserver, SyncStats};
