use hamframe_codec::{Attempt, DecodeVerdict, SyncObserver, SyncStats};

/// A synchronizer observer for testing purposes
/// Collects all attempts for later inspection
#[derive(Default)]
pub struct Recorder {
    attempts: Vec<Attempt>,
    end_of_stream: Option<SyncStats>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Verdict sequence as a compact string: G(ood), W(rong checksum), N(o sync)
    pub fn verdict_string(&self) -> String {
        self.attempts
            .iter()
            .map(|a| match a.verdict {
                DecodeVerdict::Good => 'G',
                DecodeVerdict::WrongChecksum => 'W',
                DecodeVerdict::NoSync => 'N',
            })
            .collect()
    }

    pub fn end_of_stream(&self) -> Option<&SyncStats> {
        self.end_of_stream.as_ref()
    }
}

impl SyncObserver for Recorder {
    fn on_attempt(&mut self, attempt: &Attempt) {
        tracing::debug!(offset = attempt.offset, "on_attempt: {:?}", attempt.verdict);
        self.attempts.push(attempt.clone());
    }

    fn on_end_of_stream(&mut self, stats: &SyncStats) {
        self.end_of_stream = Some(stats.clone());
    }
}
