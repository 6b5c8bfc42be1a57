//! Player configuration

use std::path::PathBuf;

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Videos file the catalog is loaded from
    pub videos_path: PathBuf,

    /// Seed for random play (None = seeded from the OS)
    pub seed: Option<u64>,

    /// Prompt printed before each command
    pub prompt: String,
}

impl PlayerConfig {
    /// Create a new player configuration
    pub fn new(videos_path: PathBuf) -> Self {
        Self {
            videos_path,
            seed: None,
            prompt: String::from("> "),
        }
    }

    /// Make random play reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
