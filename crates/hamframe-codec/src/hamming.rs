//! Hamming(8,4) nibble codec.
//!
//! Each codeword byte carries one 4-bit nibble:
//!
//! ```text
//!  bit:   7    6    5    4    3    2    1    0
//!        d3   d2   d1   p4   d0   p2   p1   (unused)
//! ```
//! Bits 1..=7 form a classic (7,4) Hamming code where XOR-ing the indices of all
//! set bits yields the index of a single flipped bit (0 if none). Bit 0 is not
//! part of the code and is ignored on decode. The encoder table below sets it
//! to overall parity, but nothing on the receive side relies on that.
//!
//! Two or more flipped bits within one codeword produce a silent mis-decode.
//! There is no detection at this layer; the frame checksum is the only guard.

use hamframe_core::{flip_bit, get_bit};

/// Codewords for nibbles 0..=15
pub const CODEWORDS: [u8; 16] = [
    0b0000_0000, 0b0000_1111, 0b0011_0011, 0b0011_1100,
    0b0101_0101, 0b0101_1010, 0b0110_0110, 0b0110_1001,
    0b1001_0110, 0b1001_1001, 0b1010_0101, 0b1010_1010,
    0b1100_0011, 0b1100_1100, 0b1111_0000, 0b1111_1111,
];

/// XOR of the indices of all set bits in positions 1..=7.
/// Zero for a clean codeword, else the position of a single flipped bit.
#[inline]
pub fn syndrome(codeword: u8) -> u8 {
    let mut syn = 0u8;
    for pos in 1..8 {
        if get_bit(codeword, pos) == 1 {
            syn ^= pos;
        }
    }
    syn
}

/// Applies single-bit correction. Returns the corrected codeword and whether a
/// bit was flipped.
#[inline]
pub fn correct(codeword: u8) -> (u8, bool) {
    match syndrome(codeword) {
        0 => (codeword, false),
        syn => (flip_bit(codeword, syn), true),
    }
}

/// Extracts the data nibble from an (already corrected) codeword
#[inline]
pub fn extract_nibble(codeword: u8) -> u8 {
    (get_bit(codeword, 7) << 3)
        | (get_bit(codeword, 6) << 2)
        | (get_bit(codeword, 5) << 1)
        | get_bit(codeword, 3)
}

/// Corrects up to one bit error and returns the 4-bit data value.
/// Total over all 256 inputs.
pub fn decode_nibble(codeword: u8) -> u8 {
    let (corrected, flipped) = correct(codeword);
    if flipped {
        tracing::trace!("decode_nibble: corrected {:08b} -> {:08b}", codeword, corrected);
    }
    extract_nibble(corrected)
}

/// Encodes the low 4 bits of `nibble` into a codeword
#[inline]
pub fn encode_nibble(nibble: u8) -> u8 {
    assert!(nibble < 16, "encode_nibble: value {} exceeds 4 bits", nibble);
    CODEWORDS[nibble as usize]
}

/// Encodes a byte buffer into codewords, high nibble first.
/// Output is twice as long as the input.
pub fn encode_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 2);
    for &b in input {
        out.push(encode_nibble(b >> 4));
        out.push(encode_nibble(b & 0x0F));
    }
    out
}

/// Decodes pairs of codewords back into bytes, high nibble first.
pub fn decode_bytes(input: &[u8]) -> Vec<u8> {
    assert!(
        input.len() % 2 == 0,
        "decode_bytes: input length {} is not a whole number of byte pairs",
        input.len()
    );
    input
        .chunks_exact(2)
        .map(|pair| (decode_nibble(pair[0]) << 4) | decode_nibble(pair[1]))
        .collect()
}
