//! Command line parsing

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl Command {
    /// Parse a line such as `ADD_TO_PLAYLIST my_mix amazing_cats_video_id`.
    ///
    /// The keyword is case-insensitive; arguments are whitespace separated.
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (keyword.to_uppercase().as_str(), args.as_slice()) {
            ("NUMBER_OF_VIDEOS", []) => Command::NumberOfVideos,
            ("SHOW_ALL_VIDEOS", []) => Command::ShowAllVideos,
            ("PLAY", [id]) => Command::Play(id.to_string()),
            ("PLAY", _) => return Err(CommandError::Usage("PLAY <video_id>")),
            ("PLAY_RANDOM", []) => Command::PlayRandom,
            ("STOP", []) => Command::Stop,
            ("PAUSE", []) => Command::Pause,
            ("CONTINUE", []) => Command::Continue,
            ("SHOW_PLAYING", []) => Command::ShowPlaying,
            ("CREATE_PLAYLIST", [name]) => Command::CreatePlaylist(name.to_string()),
            ("CREATE_PLAYLIST", _) => {
                return Err(CommandError::Usage("CREATE_PLAYLIST <playlist_name>"))
            }
            ("ADD_TO_PLAYLIST", [playlist, id]) => Command::AddToPlaylist {
                playlist: playlist.to_string(),
                video_id: id.to_string(),
            },
            ("ADD_TO_PLAYLIST", _) => {
                return Err(CommandError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"))
            }
            ("REMOVE_FROM_PLAYLIST", [playlist, id]) => Command::RemoveFromPlaylist {
                playlist: playlist.to_string(),
                video_id: id.to_string(),
            },
            ("REMOVE_FROM_PLAYLIST", _) => {
                return Err(CommandError::Usage(
                    "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
                ))
            }
            ("CLEAR_PLAYLIST", [name]) => Command::ClearPlaylist(name.to_string()),
            ("CLEAR_PLAYLIST", _) => {
                return Err(CommandError::Usage("CLEAR_PLAYLIST <playlist_name>"))
            }
            ("DELETE_PLAYLIST", [name]) => Command::DeletePlaylist(name.to_string()),
            ("DELETE_PLAYLIST", _) => {
                return Err(CommandError::Usage("DELETE_PLAYLIST <playlist_name>"))
            }
            ("SHOW_PLAYLIST", [name]) => Command::ShowPlaylist(name.to_string()),
            ("SHOW_PLAYLIST", _) => {
                return Err(CommandError::Usage("SHOW_PLAYLIST <playlist_name>"))
            }
            ("SHOW_ALL_PLAYLISTS", []) => Command::ShowAllPlaylists,
            ("SEARCH_VIDEOS", [term]) => Command::SearchVideos(term.to_string()),
            ("SEARCH_VIDEOS", _) => return Err(CommandError::Usage("SEARCH_VIDEOS <search_term>")),
            ("SEARCH_VIDEOS_WITH_TAG", [tag]) => Command::SearchVideosWithTag(tag.to_string()),
            ("SEARCH_VIDEOS_WITH_TAG", _) => {
                return Err(CommandError::Usage("SEARCH_VIDEOS_WITH_TAG <tag_name>"))
            }
            ("FLAG_VIDEO", [id]) => Command::FlagVideo {
                video_id: id.to_string(),
                reason: None,
            },
            ("FLAG_VIDEO", [id, reason]) => Command::FlagVideo {
                video_id: id.to_string(),
                reason: Some(reason.to_string()),
            },
            ("FLAG_VIDEO", _) => return Err(CommandError::Usage("FLAG_VIDEO <video_id> [reason]")),
            ("ALLOW_VIDEO", [id]) => Command::AllowVideo(id.to_string()),
            ("ALLOW_VIDEO", _) => return Err(CommandError::Usage("ALLOW_VIDEO <video_id>")),
            ("HELP", _) => Command::Help,
            ("EXIT", _) => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(Some(command))
    }
}

/// Text printed by the HELP command
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
