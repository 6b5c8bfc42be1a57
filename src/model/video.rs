use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalog video. Never mutated after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique, stable identifier
    pub id: String,

    /// Display title, also the sort key
    pub title: String,

    /// Tags in the order they were declared (e.g. "#cat")
    pub tags: Vec<String>,
}

impl Video {
    /// Create a new video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }

    /// Tags rendered as `[#a #b]`
    pub fn tags_display(&self) -> String {
        format!("[{}]", self.tags.join(" "))
    }

    /// Whether the title contains `term`, ignoring case
    pub fn title_matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }
}

impl fmt::Display for Video {
    /// `Title (id) [tags]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.title, self.id, self.tags_display())
    }
}
