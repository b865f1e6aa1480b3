//! Sliding-window frame synchronizer

pub mod observer;
pub mod state;
pub mod stats;
pub mod synchronizer;
pub mod window;

pub use observer::{LogObserver, NullObserver, SyncObserver};
pub use state::{SyncEvent, SyncState, WindowAction};
pub use stats::SyncStats;
pub use synchronizer::{Attempt, StreamSynchronizer};
pub use window::RollingWindow;
