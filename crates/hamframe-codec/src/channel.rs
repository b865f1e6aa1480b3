//! Noisy serial link model for producing test streams.
//!
//! Each byte is dropped with probability `byte_drop_p`. Bytes that survive get
//! bits 7..1 flipped independently with probability `bit_error_p`; bit 0 is
//! never touched since it carries no information for the decoder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hamframe_core::Payload;

use crate::frame::encode_frame;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelStats {
    pub bytes_in: u64,
    pub bytes_dropped: u64,
    pub bits_flipped: u64,
}

pub struct ChannelSim {
    bit_error_p: f64,
    byte_drop_p: f64,
    rng: StdRng,
    stats: ChannelStats,
}

impl ChannelSim {
    /// Panics if either probability is outside [0, 1]
    pub fn new(bit_error_p: f64, byte_drop_p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&bit_error_p), "ChannelSim: bit_error_p {} outside [0, 1]", bit_error_p);
        assert!((0.0..=1.0).contains(&byte_drop_p), "ChannelSim: byte_drop_p {} outside [0, 1]", byte_drop_p);
        Self {
            bit_error_p,
            byte_drop_p,
            rng: StdRng::seed_from_u64(seed),
            stats: ChannelStats::default(),
        }
    }

    /// Noise-free channel, still usable as a payload generator
    pub fn clean(seed: u64) -> Self {
        Self::new(0.0, 0.0, seed)
    }

    pub fn stats(&self) -> &ChannelStats {
        &self.stats
    }

    pub fn random_payload(&mut self) -> Payload {
        let mut payload = [0u8; hamframe_core::PAYLOAD_LEN];
        self.rng.fill(&mut payload);
        payload
    }

    /// Passes one byte through the channel. Returns None if it was dropped.
    pub fn transmit_byte(&mut self, byte: u8) -> Option<u8> {
        self.stats.bytes_in += 1;
        if self.rng.random_bool(self.byte_drop_p) {
            self.stats.bytes_dropped += 1;
            return None;
        }

        let mut out = byte;
        for bit in (1..8).rev() {
            if self.rng.random_bool(self.bit_error_p) {
                out ^= 1 << bit;
                self.stats.bits_flipped += 1;
            }
        }
        Some(out)
    }

    pub fn transmit(&mut self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        for &b in input {
            if let Some(b) = self.transmit_byte(b) {
                out.push(b);
            }
        }
        out
    }

    /// Generates `frame_count` random payloads, encodes them back to back and
    /// passes the result through the channel.
    /// Returns the payloads and the received raw stream.
    pub fn generate_stream(&mut self, frame_count: usize) -> (Vec<Payload>, Vec<u8>) {
        let payloads: Vec<Payload> = (0..frame_count).map(|_| self.random_payload()).collect();
        let mut stream = Vec::with_capacity(frame_count * hamframe_core::RAW_FRAME_LEN);
        for payload in &payloads {
            let raw = encode_frame(payload);
            stream.extend(self.transmit(&raw));
        }
        tracing::debug!(
            "generate_stream: {} frames, {} bytes dropped, {} bits flipped",
            frame_count,
            self.stats.bytes_dropped,
            self.stats.bits_flipped
        );
        (payloads, stream)
    }
}
