use super::search::{sort_by_title, SearchResults};
use crate::error::{LibraryError, Result};
use crate::model::{Catalog, Playlist, Video};
use crate::player::{NowPlaying, PlaybackController, PlaybackState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// A playlist resolved against the catalog, for display
#[derive(Debug, Clone)]
pub struct PlaylistView<'a> {
    /// Name with its original casing
    pub name: &'a str,

    /// Videos in insertion order
    pub videos: Vec<&'a Video>,
}

impl PlaylistView<'_> {
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Single player session: catalog, playlists and playback state
#[derive(Debug)]
pub struct LibraryManager {
    catalog: Catalog,

    /// Playlists keyed by lowercased name
    playlists: HashMap<String, Playlist>,

    player: PlaybackController,
    rng: StdRng,
}

impl LibraryManager {
    /// Create a manager over `catalog` with an entropy-seeded random source
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// Create a manager whose random play is reproducible
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            playlists: HashMap::new(),
            player: PlaybackController::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.player.state()
    }

    /// ID of the video loaded in the player, if any
    pub fn current_video_id(&self) -> Option<&str> {
        self.player.current_id()
    }

    pub fn number_of_videos(&self) -> usize {
        self.catalog.video_count()
    }

    /// Every catalog video, sorted by title
    pub fn list_all(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.catalog.videos().iter().collect();
        sort_by_title(&mut videos);
        videos
    }

    // Playback

    pub fn play(&mut self, video_id: &str) -> Result<&Video> {
        self.player.play(&self.catalog, video_id)
    }

    pub fn play_random(&mut self) -> Result<&Video> {
        self.player.play_random(&self.catalog, &mut self.rng)
    }

    pub fn stop(&mut self) -> Result<&Video> {
        self.player.stop(&self.catalog)
    }

    pub fn pause(&mut self) -> Result<&Video> {
        self.player.pause(&self.catalog)
    }

    pub fn resume(&mut self) -> Result<&Video> {
        self.player.resume(&self.catalog)
    }

    pub fn show_playing(&self) -> Result<NowPlaying<'_>> {
        self.player.describe_current(&self.catalog)
    }

    // Playlists

    pub fn create_playlist(&mut self, name: &str) -> Result<&Playlist> {
        let key = normalize(name);
        if self.playlists.contains_key(&key) {
            return Err(LibraryError::PlaylistExists);
        }
        log::debug!("Creating playlist {:?}", name);
        Ok(self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string())))
    }

    /// Append a catalog video to a playlist
    pub fn add_video_to_playlist(&mut self, name: &str, video_id: &str) -> Result<&Video> {
        let playlist = self
            .playlists
            .get_mut(&normalize(name))
            .ok_or(LibraryError::PlaylistNotFound)?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(LibraryError::VideoNotFound)?;

        playlist.add(video)?;
        log::debug!("Added {} to {:?} ({} videos)", video.id, playlist.name, playlist.len());
        Ok(video)
    }

    /// All playlists sorted by name, ignoring case
    pub fn list_all_playlists(&self) -> Result<Vec<&Playlist>> {
        if self.playlists.is_empty() {
            return Err(LibraryError::NoPlaylists);
        }
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by_cached_key(|p| normalize(&p.name));
        Ok(playlists)
    }

    pub fn show_playlist(&self, name: &str) -> Result<PlaylistView<'_>> {
        let playlist = self.playlist(name)?;
        let videos = playlist
            .list()
            .iter()
            .filter_map(|id| self.catalog.get_video(id))
            .collect();

        Ok(PlaylistView {
            name: &playlist.name,
            videos,
        })
    }

    /// Remove a video from a playlist, returning the removed video
    pub fn remove_video_from_playlist(&mut self, name: &str, video_id: &str) -> Result<&Video> {
        let playlist = self
            .playlists
            .get_mut(&normalize(name))
            .ok_or(LibraryError::PlaylistNotFound)?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(LibraryError::VideoNotFound)?;

        if !playlist.remove_by_id(video_id) {
            return Err(LibraryError::VideoNotInPlaylist);
        }
        log::debug!("Removed {} from {:?}", video.id, playlist.name);
        Ok(video)
    }

    /// Empty a playlist. Clearing an empty playlist succeeds.
    pub fn clear_playlist(&mut self, name: &str) -> Result<&Playlist> {
        let playlist = self
            .playlists
            .get_mut(&normalize(name))
            .ok_or(LibraryError::PlaylistNotFound)?;
        playlist.clear();
        Ok(playlist)
    }

    /// Delete a playlist, handing it back to the caller
    pub fn delete_playlist(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .remove(&normalize(name))
            .ok_or(LibraryError::PlaylistNotFound)?;
        log::debug!("Deleted playlist {:?}", playlist.name);
        Ok(playlist)
    }

    fn playlist(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&normalize(name))
            .ok_or(LibraryError::PlaylistNotFound)
    }

    // Search

    pub fn search(&self, term: &str) -> Result<SearchResults<'_>> {
        let results = SearchResults::run(term, self.catalog.videos());
        if results.is_empty() {
            return Err(LibraryError::NoSearchResults(term.to_string()));
        }
        Ok(results)
    }

    /// Play the `number`th (1-based) result of searching `term`.
    ///
    /// Returns `Ok(None)` when the number does not address a result.
    pub fn play_search_result(&mut self, term: &str, number: usize) -> Result<Option<&Video>> {
        let video_id = match self.search(term)?.get(number) {
            Some(video) => video.id.clone(),
            None => return Ok(None),
        };
        self.play(&video_id).map(Some)
    }

    // Not available yet

    pub fn search_videos_with_tag(&self, _tag: &str) -> Result<Vec<&Video>> {
        Err(LibraryError::NotSupported("searchVideosWithTag"))
    }

    pub fn flag_video(&mut self, _video_id: &str, _reason: Option<&str>) -> Result<&Video> {
        Err(LibraryError::NotSupported("flagVideo"))
    }

    pub fn allow_video(&mut self, _video_id: &str) -> Result<&Video> {
        Err(LibraryError::NotSupported("allowVideo"))
    }
}

/// Lookup key for a playlist name
fn normalize(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> LibraryManager {
        let catalog = [
            Video::new("2", "another cat video", vec!["#cat".to_string()]),
            Video::new("1", "Amazing Cat Video", vec!["#cat".to_string()]),
            Video::new("3", "Funny Dogs", vec!["#dog".to_string()]),
        ]
        .into_iter()
        .collect();
        LibraryManager::with_seed(catalog, 42)
    }

    #[test]
    fn test_list_all_sorted_case_sensitive() {
        let manager = manager();
        let titles: Vec<&str> = manager.list_all().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["Amazing Cat Video", "Funny Dogs", "another cat video"]);
    }

    #[test]
    fn test_create_playlist_keeps_casing() {
        let mut manager = manager();
        assert_eq!(manager.create_playlist("My Mix").unwrap().name, "My Mix");
        assert_eq!(
            manager.create_playlist("MY MIX").unwrap_err(),
            LibraryError::PlaylistExists
        );
        assert_eq!(manager.show_playlist("my mix").unwrap().name, "My Mix");
    }

    #[test]
    fn test_add_video_checks_playlist_first() {
        let mut manager = manager();
        assert_eq!(
            manager.add_video_to_playlist("nope", "missing").unwrap_err(),
            LibraryError::PlaylistNotFound
        );

        manager.create_playlist("mix").unwrap();
        assert_eq!(
            manager.add_video_to_playlist("mix", "missing").unwrap_err(),
            LibraryError::VideoNotFound
        );
        assert_eq!(manager.add_video_to_playlist("MIX", "1").unwrap().id, "1");
        assert_eq!(
            manager.add_video_to_playlist("mix", "1").unwrap_err(),
            LibraryError::VideoAlreadyAdded
        );
        assert_eq!(manager.show_playlist("mix").unwrap().videos.len(), 1);
    }

    #[test]
    fn test_show_playlist_in_insertion_order() {
        let mut manager = manager();
        manager.create_playlist("mix").unwrap();
        manager.add_video_to_playlist("mix", "3").unwrap();
        manager.add_video_to_playlist("mix", "1").unwrap();

        let view = manager.show_playlist("Mix").unwrap();
        let ids: Vec<&str> = view.videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn test_list_all_playlists_sorted_ignoring_case() {
        let mut manager = manager();
        assert_eq!(
            manager.list_all_playlists().unwrap_err(),
            LibraryError::NoPlaylists
        );

        manager.create_playlist("beta").unwrap();
        manager.create_playlist("Alpha").unwrap();
        manager.create_playlist("Gamma").unwrap();

        let names: Vec<&str> = manager
            .list_all_playlists()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_remove_video_from_playlist() {
        let mut manager = manager();
        assert_eq!(
            manager.remove_video_from_playlist("mix", "1").unwrap_err(),
            LibraryError::PlaylistNotFound
        );

        manager.create_playlist("mix").unwrap();
        manager.add_video_to_playlist("mix", "1").unwrap();

        assert_eq!(
            manager.remove_video_from_playlist("mix", "missing").unwrap_err(),
            LibraryError::VideoNotFound
        );
        assert_eq!(
            manager.remove_video_from_playlist("mix", "3").unwrap_err(),
            LibraryError::VideoNotInPlaylist
        );
        assert_eq!(
            manager.remove_video_from_playlist("MIX", "1").unwrap().title,
            "Amazing Cat Video"
        );
        assert!(manager.show_playlist("mix").unwrap().is_empty());
    }

    #[test]
    fn test_clear_and_delete() {
        let mut manager = manager();
        manager.create_playlist("mix").unwrap();
        manager.add_video_to_playlist("mix", "1").unwrap();

        assert_eq!(manager.clear_playlist("Mix").unwrap().len(), 0);
        assert_eq!(manager.clear_playlist("mix").unwrap().len(), 0);

        assert_eq!(manager.delete_playlist("MIX").unwrap().name, "mix");
        assert_eq!(
            manager.delete_playlist("mix").unwrap_err(),
            LibraryError::PlaylistNotFound
        );
        assert_eq!(
            manager.clear_playlist("mix").unwrap_err(),
            LibraryError::PlaylistNotFound
        );

        // The name is free again
        assert!(manager.create_playlist("Mix").is_ok());
    }

    #[test]
    fn test_search_and_play_result() {
        let mut manager = manager();
        assert_eq!(
            manager.search("horse").unwrap_err(),
            LibraryError::NoSearchResults("horse".to_string())
        );
        assert_eq!(manager.search("CAT").unwrap().len(), 2);

        assert_eq!(manager.play_search_result("cat", 5).unwrap(), None);
        assert_eq!(manager.playback_state(), PlaybackState::None);

        let played = manager.play_search_result("cat", 2).unwrap().unwrap();
        assert_eq!(played.id, "2");
        assert_eq!(manager.current_video_id(), Some("2"));
    }

    #[test]
    fn test_playback_passthrough() {
        let mut manager = manager();
        manager.play("3").unwrap();
        manager.pause().unwrap();

        let now = manager.show_playing().unwrap();
        assert_eq!(now.video.id, "3");
        assert!(now.paused);

        manager.resume().unwrap();
        manager.stop().unwrap();
        assert_eq!(manager.playback_state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_play_random_is_reproducible() {
        let mut first = manager();
        let mut second = manager();
        for _ in 0..5 {
            let a = first.play_random().unwrap().id.clone();
            let b = second.play_random().unwrap().id.clone();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_placeholders_are_not_supported() {
        let mut manager = manager();
        assert!(matches!(
            manager.search_videos_with_tag("#cat"),
            Err(LibraryError::NotSupported(_))
        ));
        assert!(matches!(
            manager.flag_video("1", Some("dont_like_cats")),
            Err(LibraryError::NotSupported(_))
        ));
        assert!(matches!(
            manager.allow_video("1"),
            Err(LibraryError::NotSupported(_))
        ));
    }
}
