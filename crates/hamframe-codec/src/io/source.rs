use std::fs::OpenOptions;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use super::StreamIoError;

/// Pull-based source of raw codeword bytes.
pub trait ByteSource {
    /// Returns the next byte, `Ok(None)` once the stream is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>, StreamIoError>;
}

/// Byte source over any reader. Reads are buffered.
pub struct ReaderSource<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }
}

impl ReaderSource<std::fs::File> {
    /// Opens `filename` for reading
    pub fn open<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).open(filename)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, StreamIoError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// In-memory byte source
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Result<Option<u8>, StreamIoError> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}
