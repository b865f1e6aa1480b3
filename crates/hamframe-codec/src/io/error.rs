use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamIoError {
    /// Underlying reader or writer failed
    Io(String),
}

impl From<io::Error> for StreamIoError {
    fn from(err: io::Error) -> Self {
        StreamIoError::Io(err.to_string())
    }
}

impl fmt::Display for StreamIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamIoError::Io(msg) => write!(f, "stream i/o error: {}", msg),
        }
    }
}

impl std::error::Error for StreamIoError {}
