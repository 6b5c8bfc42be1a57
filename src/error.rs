//! Expected outcomes of library operations
//!
//! None of these are faults: each one is a normal answer to a user command
//! and leaves the library untouched. The display text is the reason the
//! shell appends after its `Cannot ...:` prefix.

/// Named failure reasons returned by library, playlist and playback operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("No video is currently playing")]
    NothingPlaying,

    /// Carries the title of the paused video
    #[error("Video already paused: {0}")]
    AlreadyPaused(String),

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("Video already added")]
    VideoAlreadyAdded,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    #[error("No playlists exist yet")]
    NoPlaylists,

    /// Carries the search term as given
    #[error("No search results for {0}")]
    NoSearchResults(String),

    /// Carries the name of the operation
    #[error("{0} is not available")]
    NotSupported(&'static str),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
