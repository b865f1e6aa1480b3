use std::fmt;

use crate::frame::DecodeVerdict;

/// Counters kept by the synchronizer over the lifetime of one stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Raw bytes read from the source
    pub bytes_in: u64,
    /// Bytes dropped from the window head after a failed attempt
    pub bytes_slid: u64,
    /// Bytes left in a partial window at end of stream
    pub tail_dropped: u64,
    pub good: u64,
    pub wrong_checksum: u64,
    pub no_sync: u64,
}

impl SyncStats {
    pub fn record(&mut self, verdict: DecodeVerdict) {
        match verdict {
            DecodeVerdict::Good => self.good += 1,
            DecodeVerdict::WrongChecksum => self.wrong_checksum += 1,
            DecodeVerdict::NoSync => self.no_sync += 1,
        }
    }

    pub fn attempts(&self) -> u64 {
        self.good + self.wrong_checksum + self.no_sync
    }
}

impl fmt::Display for SyncStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bytes_in={} frames_good={} wrong_checksum={} no_sync={} bytes_slid={} tail_dropped={}",
            self.bytes_in, self.good, self.wrong_checksum, self.no_sync, self.bytes_slid, self.tail_dropped
        )
    }
}
