use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use hamframe_core::Payload;

use super::StreamIoError;

/// Receives the payload of every valid frame, once per frame.
pub trait PayloadSink {
    fn append(&mut self, payload: &Payload) -> Result<(), StreamIoError>;

    /// Pushes buffered payloads to the underlying medium (optional)
    fn flush(&mut self) -> Result<(), StreamIoError> {
        Ok(())
    }
}

/// Writes payloads back to back to any writer
pub struct WriterSink<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    /// Number of payloads written so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl WriterSink<std::fs::File> {
    /// Creates or truncates `filename`
    pub fn create<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(filename)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> PayloadSink for WriterSink<W> {
    fn append(&mut self, payload: &Payload) -> Result<(), StreamIoError> {
        self.writer.write_all(payload)?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StreamIoError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects payloads in memory
impl PayloadSink for Vec<Payload> {
    fn append(&mut self, payload: &Payload) -> Result<(), StreamIoError> {
        self.push(*payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink() {
        let mut out = Vec::new();
        {
            let mut sink = WriterSink::new(&mut out);
            sink.append(&[0x11; 12]).unwrap();
            sink.append(&[0x22; 12]).unwrap();
            assert_eq!(sink.written(), 2);
            sink.flush().unwrap();
        }
        assert_eq!(out.len(), 24);
        assert!(out[..12].iter().all(|&b| b == 0x11));
        assert!(out[12..].iter().all(|&b| b == 0x22));
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<Payload> = Vec::new();
        PayloadSink::append(&mut sink, &[0x12; 12]).unwrap();
        assert_eq!(sink, vec![[0x12; 12]]);
    }
}
