//! Resynchronization policy as an explicit transition table.
//!
//! | state    | event                      | next     | window action |
//! |----------|----------------------------|----------|---------------|
//! | Filling  | byte in, len < 30          | Filling  | keep          |
//! | Filling  | byte in, len == 30         | Checking | keep          |
//! | Checking | Good                       | Filling  | emit + clear  |
//! | Checking | WrongChecksum / NoSync     | Filling  | drop first    |

use hamframe_core::RAW_FRAME_LEN;

use crate::frame::DecodeVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Window holds fewer than 30 bytes
    Filling,
    /// Window holds exactly 30 bytes and must be assembled and validated
    Checking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncEvent {
    /// A byte was appended; carries the resulting window length
    ByteIn { window_len: usize },
    /// The full window was assembled and validated
    Checked(DecodeVerdict),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Keep,
    /// Hand the payload to the sink, then empty the window
    EmitAndClear,
    /// Discard the oldest byte and retry at the next alignment
    DropFirst,
}

/// Returns the next state and what to do with the window.
/// Panics on an event that cannot occur in `state`.
pub fn transition(state: SyncState, event: SyncEvent) -> (SyncState, WindowAction) {
    match (state, event) {
        (SyncState::Filling, SyncEvent::ByteIn { window_len }) => {
            assert!(window_len <= RAW_FRAME_LEN, "transition: window length {} exceeds {}", window_len, RAW_FRAME_LEN);
            if window_len == RAW_FRAME_LEN {
                (SyncState::Checking, WindowAction::Keep)
            } else {
                (SyncState::Filling, WindowAction::Keep)
            }
        }
        (SyncState::Checking, SyncEvent::Checked(DecodeVerdict::Good)) => (SyncState::Filling, WindowAction::EmitAndClear),
        (SyncState::Checking, SyncEvent::Checked(DecodeVerdict::WrongChecksum | DecodeVerdict::NoSync)) => {
            (SyncState::Filling, WindowAction::DropFirst)
        }
        (state, event) => panic!("transition: event {:?} not valid in state {:?}", event, state),
    }
}
