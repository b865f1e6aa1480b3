use crate::frame::DecodeVerdict;

use super::{Attempt, SyncStats};

/// Receives every window attempt made by the synchronizer.
pub trait SyncObserver {
    fn on_attempt(&mut self, attempt: &Attempt);

    /// Called once when the source is exhausted or reading was cancelled
    fn on_end_of_stream(&mut self, _stats: &SyncStats) {}
}

/// Observer that ignores everything
pub struct NullObserver;

impl SyncObserver for NullObserver {
    fn on_attempt(&mut self, _attempt: &Attempt) {}
}

/// Logs attempts through `tracing`.
///
/// NoSync is expected in bursts of roughly one window length after any
/// corruption, one per byte of slide, so individual NoSync attempts are only
/// traced and the burst length is reported when alignment is found again.
#[derive(Default)]
pub struct LogObserver {
    nosync_run: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn end_nosync_run(&mut self, offset: u64) {
        if self.nosync_run > 0 {
            tracing::debug!(offset, "-> realigned after {} misaligned attempts", self.nosync_run);
            self.nosync_run = 0;
        }
    }
}

impl SyncObserver for LogObserver {
    fn on_attempt(&mut self, attempt: &Attempt) {
        let offset = attempt.offset;
        match attempt.verdict {
            DecodeVerdict::Good => {
                self.end_nosync_run(offset);
                tracing::debug!(offset, "good frame {:02x?}", &attempt.frame[..]);
            }
            DecodeVerdict::WrongChecksum => {
                self.end_nosync_run(offset);
                tracing::info!(offset, "corrupted frame, checksum mismatch");
            }
            DecodeVerdict::NoSync => {
                self.nosync_run += 1;
                tracing::trace!(offset, "no sync");
            }
        }
    }

    fn on_end_of_stream(&mut self, stats: &SyncStats) {
        if stats.tail_dropped > 0 {
            tracing::debug!("end of stream: dropped partial window of {} bytes", stats.tail_dropped);
        }
        tracing::info!("{}", stats);
    }
}
