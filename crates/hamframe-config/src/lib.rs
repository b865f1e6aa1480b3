//! hamframe configuration management
//!
//! This crate provides configuration loading and parsing for the hamframe tools:
//! - TOML configuration file parsing
//! - Decoder and test stream generator settings

pub mod decoder_config;
pub mod toml_config;

pub use decoder_config::*;
pub use toml_config::*;
