#![allow(dead_code)]

pub mod recorder;
pub mod streams;

pub use recorder::Recorder;
pub use streams::*;
