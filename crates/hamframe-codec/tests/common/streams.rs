use hamframe_codec::frame::encode_frame;
use hamframe_codec::io::SliceSource;
use hamframe_codec::{StreamSynchronizer, SyncStats};
use hamframe_core::Payload;

use super::Recorder;

/// Payload with bytes `base, base + 1, ..., base + 11`
pub fn counting_payload(base: u8) -> Payload {
    core::array::from_fn(|i| base.wrapping_add(i as u8))
}

/// Encodes all payloads back to back
pub fn encode_stream(payloads: &[Payload]) -> Vec<u8> {
    payloads.iter().flat_map(|p| encode_frame(p)).collect()
}

/// Runs a fresh synchronizer over `data`, collecting payloads and attempts
pub fn run_sync(data: &[u8]) -> (Vec<Payload>, Recorder, SyncStats) {
    let mut sink: Vec<Payload> = Vec::new();
    let mut recorder = Recorder::new();
    let stats = StreamSynchronizer::new()
        .run(&mut SliceSource::new(data), &mut sink, &mut recorder, None)
        .expect("in-memory stream cannot fail");
    (sink, recorder, stats)
}
