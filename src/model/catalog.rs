use super::Video;
use std::collections::HashMap;

/// The fixed set of videos known to the player
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Videos in load order
    videos: Vec<Video>,

    /// Position in `videos` by ID
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            videos: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a video to the catalog. Returns false if the ID is already taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.index.contains_key(&video.id) {
            return false;
        }
        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(video);
        true
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&pos| &self.videos[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All videos in load order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.video_count(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_video(Video::new("test123", "Test Video", Vec::new())));

        assert_eq!(catalog.video_count(), 1);
        assert!(catalog.contains("test123"));
        assert_eq!(catalog.get_video("test123").unwrap().title, "Test Video");
        assert!(catalog.get_video("other").is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_video(Video::new("1", "First", Vec::new())));
        assert!(!catalog.add_video(Video::new("1", "Second", Vec::new())));

        assert_eq!(catalog.video_count(), 1);
        assert_eq!(catalog.get_video("1").unwrap().title, "First");
    }

    #[test]
    fn test_load_order_is_kept() {
        let catalog: Catalog = ["c", "a", "b"]
            .into_iter()
            .map(|id| Video::new(id, id.to_uppercase(), Vec::new()))
            .collect();

        let ids: Vec<&str> = catalog.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
