//! Video Library - in-memory video player simulator
//!
//! This library models a catalog of videos, a single playback slot and
//! user-defined playlists, driven by a line-oriented command shell.

pub mod config;
pub mod error;
pub mod library;
pub mod loader;
pub mod model;
pub mod player;
pub mod shell;

pub use config::PlayerConfig;
pub use error::LibraryError;
pub use library::LibraryManager;
pub use shell::Shell;

use anyhow::Result;

/// Load the catalog named by `config` and build a manager over it
pub fn open_library(config: &PlayerConfig) -> Result<LibraryManager> {
    let catalog = loader::load_catalog(&config.videos_path)?;
    Ok(match config.seed {
        Some(seed) => LibraryManager::with_seed(catalog, seed),
        None => LibraryManager::new(catalog),
    })
}
