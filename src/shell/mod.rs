//! Interactive command shell
//!
//! Reads one command per line, runs it against a [`LibraryManager`] and
//! renders the outcome as text. All wording lives here; the library only
//! returns structured results.

mod command;

pub use command::{Command, CommandError, HELP_TEXT};

use crate::error::LibraryError;
use crate::library::{parse_selection, LibraryManager};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Whether the shell should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command interpreter bound to an input and an output stream
pub struct Shell<R, W> {
    manager: LibraryManager,
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(manager: LibraryManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
            prompt: String::from("> "),
        }
    }

    /// Set the prompt printed before each command
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn manager(&self) -> &LibraryManager {
        &self.manager
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Hello and welcome to the video player, what would you like to do?"
        )?;
        writeln!(
            self.output,
            "Enter HELP for list of available commands or EXIT to terminate."
        )?;

        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                log::debug!("End of input");
                break;
            };

            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }

        writeln!(
            self.output,
            "The video player has now terminated its execution. Thank you and goodbye!"
        )?;
        Ok(())
    }

    /// Parse and run a single line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                if let CommandError::Usage(usage) = e {
                    writeln!(self.output, "Usage: {}", usage)?;
                }
                writeln!(
                    self.output,
                    "Please enter a valid command, type HELP for a list of available commands."
                )?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run a parsed command and print its outcome
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        let out = &mut self.output;
        let manager = &mut self.manager;

        match command {
            Command::NumberOfVideos => {
                writeln!(out, "{} videos in the library", manager.number_of_videos())?;
            }
            Command::ShowAllVideos => {
                writeln!(out, "Here's a list of all available videos:")?;
                for video in manager.list_all() {
                    writeln!(out, "{}", video)?;
                }
            }
            Command::Play(video_id) => match manager.play(&video_id) {
                Ok(video) => writeln!(out, "Playing video: {}", video.title)?,
                Err(e) => writeln!(out, "Cannot play video: {}", e)?,
            },
            Command::PlayRandom => match manager.play_random() {
                Ok(video) => writeln!(out, "Playing video: {}", video.title)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Stop => match manager.stop() {
                Ok(video) => writeln!(out, "Stopping video: {}", video.title)?,
                Err(e) => writeln!(out, "Cannot stop video: {}", e)?,
            },
            Command::Pause => match manager.pause() {
                Ok(video) => writeln!(out, "Pausing video: {}", video.title)?,
                Err(e @ LibraryError::AlreadyPaused(_)) => writeln!(out, "{}", e)?,
                Err(e) => writeln!(out, "Cannot pause video: {}", e)?,
            },
            Command::Continue => match manager.resume() {
                Ok(video) => writeln!(out, "Continuing video: {}", video.title)?,
                Err(e) => writeln!(out, "Cannot continue video: {}", e)?,
            },
            Command::ShowPlaying => match manager.show_playing() {
                Ok(now) if now.paused => writeln!(out, "Currently playing: {} - PAUSED", now.video)?,
                Ok(now) => writeln!(out, "Currently playing: {}", now.video)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::CreatePlaylist(name) => match manager.create_playlist(&name) {
                Ok(playlist) => writeln!(
                    out,
                    "Successfully created new playlist: {}",
                    playlist.name
                )?,
                Err(e) => writeln!(out, "Cannot create playlist: {}", e)?,
            },
            Command::AddToPlaylist { playlist, video_id } => {
                match manager.add_video_to_playlist(&playlist, &video_id) {
                    Ok(video) => writeln!(out, "Added video to {}: {}", playlist, video.title)?,
                    Err(e) => writeln!(out, "Cannot add video to {}: {}", playlist, e)?,
                }
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                match manager.remove_video_from_playlist(&playlist, &video_id) {
                    Ok(video) => writeln!(out, "Removed video from {}: {}", playlist, video.title)?,
                    Err(e) => writeln!(out, "Cannot remove video from {}: {}", playlist, e)?,
                }
            }
            Command::ClearPlaylist(name) => match manager.clear_playlist(&name) {
                Ok(_) => writeln!(out, "Successfully removed all videos from {}", name)?,
                Err(e) => writeln!(out, "Cannot clear playlist {}: {}", name, e)?,
            },
            Command::DeletePlaylist(name) => match manager.delete_playlist(&name) {
                Ok(_) => writeln!(out, "Deleted playlist: {}", name)?,
                Err(e) => writeln!(out, "Cannot delete playlist {}: {}", name, e)?,
            },
            Command::ShowPlaylist(name) => match manager.show_playlist(&name) {
                Ok(view) => {
                    writeln!(out, "Showing playlist: {}", name)?;
                    if view.is_empty() {
                        writeln!(out, "No videos here yet")?;
                    }
                    for video in view.videos {
                        writeln!(out, "{}", video)?;
                    }
                }
                Err(e) => writeln!(out, "Cannot show playlist {}: {}", name, e)?,
            },
            Command::ShowAllPlaylists => match manager.list_all_playlists() {
                Ok(playlists) => {
                    writeln!(out, "Showing all playlists:")?;
                    for playlist in playlists {
                        writeln!(out, "{}", playlist.name)?;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::SearchVideos(term) => self.search(&term)?,
            Command::SearchVideosWithTag(tag) => {
                if let Err(e) = manager.search_videos_with_tag(&tag) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::FlagVideo { video_id, reason } => {
                if let Err(e) = manager.flag_video(&video_id, reason.as_deref()) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::AllowVideo(video_id) => {
                if let Err(e) = manager.allow_video(&video_id) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP_TEXT)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// List matches, then read the next line as the user's pick
    fn search(&mut self, term: &str) -> Result<()> {
        let count = match self.manager.search(term) {
            Ok(results) => {
                writeln!(self.output, "Here are the results for {}:", term)?;
                for (number, video) in results.numbered() {
                    writeln!(self.output, "{}) {}", number, video)?;
                }
                results.len()
            }
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        };

        writeln!(
            self.output,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(
            self.output,
            "If your answer is not a valid number, we will assume it's a no."
        )?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        let Some(number) = parse_selection(&answer) else {
            log::debug!("No search selection made from {:?}", answer);
            return Ok(());
        };
        if number > count {
            return Ok(());
        }

        match self.manager.play_search_result(term, number) {
            Ok(Some(video)) => writeln!(self.output, "Playing video: {}", video.title)?,
            Ok(None) => {}
            Err(e) => writeln!(self.output, "Cannot play video: {}", e)?,
        }
        Ok(())
    }

    /// Next input line without its line ending, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
