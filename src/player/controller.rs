use super::PlaybackState;
use crate::error::{LibraryError, Result};
use crate::model::{Catalog, Video};
use rand::seq::SliceRandom;
use rand::Rng;

/// What is loaded in the player right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    pub video: &'a Video,
    pub paused: bool,
}

/// Holds the current video (by catalog ID) and its playback state.
///
/// The catalog owns every video; the controller only keeps the ID and
/// resolves it against the catalog passed to each call.
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    current: Option<String>,
    state: PlaybackState,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// ID of the loaded video, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Load and play `video_id`, silently stopping whatever was loaded before
    pub fn play<'c>(&mut self, catalog: &'c Catalog, video_id: &str) -> Result<&'c Video> {
        let video = catalog
            .get_video(video_id)
            .ok_or(LibraryError::VideoNotFound)?;

        if self.state != PlaybackState::None {
            // Implicit stop: no event for the caller
            if self.state.is_active() {
                log::debug!("Implicitly stopping {:?}", self.current);
            }
            self.state = PlaybackState::Stopped;
        }

        self.current = Some(video.id.clone());
        self.state = PlaybackState::Playing;
        log::debug!("Playing {}", video.id);
        Ok(video)
    }

    /// Pick a uniformly random catalog video and play it
    pub fn play_random<'c, R: Rng + ?Sized>(
        &mut self,
        catalog: &'c Catalog,
        rng: &mut R,
    ) -> Result<&'c Video> {
        let video = catalog
            .videos()
            .choose(rng)
            .ok_or(LibraryError::NoVideosAvailable)?;
        self.play(catalog, &video.id)
    }

    pub fn stop<'c>(&mut self, catalog: &'c Catalog) -> Result<&'c Video> {
        if !self.state.is_active() {
            return Err(LibraryError::NothingPlaying);
        }
        let video = self.loaded(catalog)?;
        self.state = PlaybackState::Stopped;
        log::debug!("Stopped {}", video.id);
        Ok(video)
    }

    pub fn pause<'c>(&mut self, catalog: &'c Catalog) -> Result<&'c Video> {
        match self.state {
            PlaybackState::Playing => {
                let video = self.loaded(catalog)?;
                self.state = PlaybackState::Paused;
                log::debug!("Paused {}", video.id);
                Ok(video)
            }
            PlaybackState::Paused => {
                let video = self.loaded(catalog)?;
                Err(LibraryError::AlreadyPaused(video.title.clone()))
            }
            PlaybackState::Stopped | PlaybackState::None => Err(LibraryError::NothingPlaying),
        }
    }

    /// Continue a paused video
    pub fn resume<'c>(&mut self, catalog: &'c Catalog) -> Result<&'c Video> {
        match self.state {
            PlaybackState::Paused => {
                let video = self.loaded(catalog)?;
                self.state = PlaybackState::Playing;
                log::debug!("Resumed {}", video.id);
                Ok(video)
            }
            PlaybackState::Playing => Err(LibraryError::NotPaused),
            PlaybackState::Stopped | PlaybackState::None => Err(LibraryError::NothingPlaying),
        }
    }

    /// The loaded video and whether it is paused. A stopped video counts as nothing.
    pub fn describe_current<'c>(&self, catalog: &'c Catalog) -> Result<NowPlaying<'c>> {
        if !self.state.is_active() {
            return Err(LibraryError::NothingPlaying);
        }
        Ok(NowPlaying {
            video: self.loaded(catalog)?,
            paused: self.state == PlaybackState::Paused,
        })
    }

    fn loaded<'c>(&self, catalog: &'c Catalog) -> Result<&'c Video> {
        self.current
            .as_deref()
            .and_then(|id| catalog.get_video(id))
            .ok_or(LibraryError::NothingPlaying)
    }
}
