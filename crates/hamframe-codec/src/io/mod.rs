//! Byte source and payload sink collaborators of the synchronizer

pub mod error;
pub mod sink;
pub mod source;

pub use error::StreamIoError;
pub use sink::{PayloadSink, WriterSink};
pub use source::{ByteSource, ReaderSource, SliceSource};
