//! Playback state machine
//!
//! Tracks which catalog video is loaded and whether it is playing,
//! paused or stopped.

mod controller;
mod state;

pub use controller::{NowPlaying, PlaybackController};
pub use state::PlaybackState;
