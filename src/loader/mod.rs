//! Catalog loading
//!
//! Reads the video catalog from a plain-text file with one video per line:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! ```

mod parser;

pub use parser::{parse_catalog, parse_line};

use crate::model::Catalog;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a catalog from a videos file
///
/// # Arguments
/// * `path` - Path to the videos file (e.g. data/videos.txt)
///
/// # Returns
/// A catalog holding every well-formed entry, in file order
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video catalog from {:?}", path);
    let file =
        File::open(path).with_context(|| format!("Failed to open videos file: {:?}", path))?;

    let videos = parse_catalog(BufReader::new(file))
        .with_context(|| format!("Failed to read videos file: {:?}", path))?;

    let mut catalog = Catalog::new();
    for video in videos {
        let id = video.id.clone();
        if !catalog.add_video(video) {
            log::warn!("Skipping duplicate video id: {}", id);
        }
    }

    log::info!("Loaded catalog: {} videos", catalog.video_count());
    Ok(catalog)
}
