//! User-facing library operations
//!
//! `LibraryManager` owns the catalog, the playlists and the playback
//! controller. Every operation returns a structured result for the shell
//! to render; it never prints.

mod manager;
mod search;

pub use manager::{LibraryManager, PlaylistView};
pub use search::{parse_selection, SearchResults};
