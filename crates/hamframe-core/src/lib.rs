//! Core utilities for hamframe
//!
//! This crate provides fundamental types and utilities used across the decoder:
//! - Frame layout constants and fixed-size buffer types
//! - Bit access helpers for codeword manipulation
//! - Logging setup

pub mod bits;
pub mod debug;
pub mod layout;

// Re-export commonly used items
pub use bits::{flip_bit, get_bit, xor_fold};
pub use layout::*;
