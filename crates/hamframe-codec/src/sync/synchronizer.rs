use std::sync::atomic::{AtomicBool, Ordering};

use hamframe_core::{Frame, Payload, RAW_FRAME_LEN};

use crate::frame::{self, DecodeVerdict};
use crate::io::{ByteSource, PayloadSink, StreamIoError};

use super::state::{transition, SyncEvent, SyncState, WindowAction};
use super::window::RollingWindow;
use super::{SyncObserver, SyncStats};

/// Result of assembling and validating one full window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Stream offset of the first raw byte of the window
    pub offset: u64,
    pub verdict: DecodeVerdict,
    /// Decoded frame, whatever the verdict
    pub frame: Frame,
}

impl Attempt {
    /// Payload bytes, only for a good frame
    pub fn payload(&self) -> Option<Payload> {
        self.verdict.is_good().then(|| frame::payload_of(&self.frame))
    }
}

/// Finds frame boundaries in a raw codeword stream of unknown alignment.
///
/// Bytes are collected into a 30-byte window. Once full, the window is decoded
/// and validated: a good frame is emitted and the window starts over empty;
/// any failure drops only the oldest byte, so every alignment gets tried.
pub struct StreamSynchronizer {
    state: SyncState,
    window: RollingWindow,
    stats: SyncStats,
}

impl Default for StreamSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamSynchronizer {
    pub fn new() -> Self {
        Self {
            state: SyncState::Filling,
            window: RollingWindow::new(),
            stats: SyncStats::default(),
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Feeds one raw byte. Returns the attempt if the window became full.
    pub fn push_byte(&mut self, byte: u8) -> Option<Attempt> {
        self.window.push(byte);
        self.stats.bytes_in += 1;

        let (state, _) = transition(self.state, SyncEvent::ByteIn { window_len: self.window.len() });
        self.state = state;
        if self.state != SyncState::Checking {
            return None;
        }

        let frame = frame::assemble(self.window.as_slice());
        let verdict = frame::validate(&frame);
        let offset = self.stats.bytes_in - RAW_FRAME_LEN as u64;
        self.stats.record(verdict);

        let (state, action) = transition(self.state, SyncEvent::Checked(verdict));
        match action {
            WindowAction::Keep => {}
            WindowAction::EmitAndClear => {
                self.window.clear();
            }
            WindowAction::DropFirst => {
                self.window.drop_first();
                self.stats.bytes_slid += 1;
            }
        }
        self.state = state;

        Some(Attempt { offset, verdict, frame })
    }

    /// Ends the stream. The partial window is discarded without emission;
    /// returns the number of bytes dropped.
    pub fn finish(&mut self) -> usize {
        let dropped = self.window.clear();
        self.stats.tail_dropped += dropped as u64;
        self.state = SyncState::Filling;
        dropped
    }

    /// Pulls bytes from `source` until it is exhausted or `running` is cleared,
    /// writing each good payload to `sink`. Returns the final counters.
    pub fn run<S, K, O>(
        &mut self,
        source: &mut S,
        sink: &mut K,
        observer: &mut O,
        running: Option<&AtomicBool>,
    ) -> Result<SyncStats, StreamIoError>
    where
        S: ByteSource + ?Sized,
        K: PayloadSink + ?Sized,
        O: SyncObserver + ?Sized,
    {
        loop {
            if let Some(running) = running {
                if !running.load(Ordering::SeqCst) {
                    tracing::info!("run: cancelled after {} bytes", self.stats.bytes_in);
                    break;
                }
            }

            let Some(byte) = source.next_byte()? else {
                break;
            };

            if let Some(attempt) = self.push_byte(byte) {
                observer.on_attempt(&attempt);
                if let Some(payload) = attempt.payload() {
                    sink.append(&payload)?;
                }
            }
        }

        self.finish();
        sink.flush()?;
        observer.on_end_of_stream(&self.stats);
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::encode_frame;
    use crate::io::SliceSource;
    use crate::sync::NullObserver;

    #[test]
    fn test_clean_frame_resets_window() {
        let raw = encode_frame(&[0x12; 12]);
        let mut sync = StreamSynchronizer::new();
        for &b in &raw[..RAW_FRAME_LEN - 1] {
            assert!(sync.push_byte(b).is_none());
            assert_eq!(sync.state(), SyncState::Filling);
        }
        let attempt = sync.push_byte(raw[RAW_FRAME_LEN - 1]).expect("window full");
        assert_eq!(attempt.verdict, DecodeVerdict::Good);
        assert_eq!(attempt.offset, 0);
        assert_eq!(attempt.payload(), Some([0x12; 12]));
        assert_eq!(sync.window_len(), 0);
        assert_eq!(sync.state(), SyncState::Filling);
    }

    #[test]
    fn test_failed_attempt_slides_by_one() {
        let mut sync = StreamSynchronizer::new();
        for _ in 0..RAW_FRAME_LEN - 1 {
            assert!(sync.push_byte(0x00).is_none());
        }
        let attempt = sync.push_byte(0x00).expect("window full");
        assert_eq!(attempt.verdict, DecodeVerdict::NoSync);
        assert_eq!(attempt.payload(), None);
        assert_eq!(sync.window_len(), RAW_FRAME_LEN - 1);

        // Every following byte triggers another attempt
        let attempt = sync.push_byte(0x00).expect("window full again");
        assert_eq!(attempt.offset, 1);
        assert_eq!(sync.stats().bytes_slid, 2);
    }

    #[test]
    fn test_finish_drops_partial_window() {
        let mut sync = StreamSynchronizer::new();
        for _ in 0..17 {
            sync.push_byte(0xAA);
        }
        assert_eq!(sync.finish(), 17);
        assert_eq!(sync.window_len(), 0);
        assert_eq!(sync.stats().tail_dropped, 17);
    }

    #[test]
    fn test_run_stops_when_cancelled() {
        let mut data = Vec::new();
        for _ in 0..3 {
            data.extend_from_slice(&encode_frame(&[0x34; 12]));
        }
        let running = AtomicBool::new(false);
        let mut sink: Vec<Payload> = Vec::new();
        let stats = StreamSynchronizer::new()
            .run(&mut SliceSource::new(&data), &mut sink, &mut NullObserver, Some(&running))
            .unwrap();
        assert_eq!(stats.bytes_in, 0);
        assert!(sink.is_empty());
    }
}
