use serde::{Deserialize, Serialize};

/// Status of the playback slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing has been played yet
    #[default]
    None,
    Playing,
    Paused,
    Stopped,
}

impl PlaybackState {
    /// Whether a video is loaded and not stopped
    pub fn is_active(self) -> bool {
        matches!(self, PlaybackState::Playing | PlaybackState::Paused)
    }
}
