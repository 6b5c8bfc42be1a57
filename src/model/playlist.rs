use super::Video;
use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};

/// Represents a user-created playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, with the casing it was created with
    pub name: String,

    /// Video IDs in insertion order (references Video::id)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Append a video, rejecting one whose ID is already present
    pub fn add(&mut self, video: &Video) -> Result<()> {
        if self.contains(&video.id) {
            return Err(LibraryError::VideoAlreadyAdded);
        }
        self.video_ids.push(video.id.clone());
        Ok(())
    }

    /// Remove the entry with this ID. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, video_id: &str) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|id| id != video_id);
        self.video_ids.len() != before
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Video IDs in the order they were added
    pub fn list(&self) -> &[String] {
        &self.video_ids
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video::new(id, format!("Video {}", id), Vec::new())
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut playlist = Playlist::new("Mix".to_string());
        playlist.add(&video("b")).unwrap();
        playlist.add(&video("a")).unwrap();
        playlist.add(&video("c")).unwrap();

        assert_eq!(playlist.list(), ["b", "a", "c"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut playlist = Playlist::new("Mix".to_string());
        playlist.add(&video("a")).unwrap();

        // Different instance, same ID
        let result = playlist.add(&Video::new("a", "Renamed", Vec::new()));
        assert_eq!(result, Err(LibraryError::VideoAlreadyAdded));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut playlist = Playlist::new("Mix".to_string());
        playlist.add(&video("a")).unwrap();
        playlist.add(&video("b")).unwrap();

        assert!(playlist.remove_by_id("a"));
        assert!(!playlist.remove_by_id("missing"));
        assert_eq!(playlist.list(), ["b"]);
    }

    #[test]
    fn test_clear() {
        let mut playlist = Playlist::new("Mix".to_string());
        playlist.add(&video("a")).unwrap();
        playlist.clear();
        assert!(playlist.is_empty());

        // Clearing again is fine
        playlist.clear();
        assert_eq!(playlist.len(), 0);
    }
}
