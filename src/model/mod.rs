//! Data model for the video library
//!
//! Videos live in the catalog for the whole run; playlists and the
//! playback controller refer to them by ID only.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::Video;
