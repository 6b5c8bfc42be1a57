//! Videos file line parser

use crate::model::Video;
use std::io::{self, BufRead};

/// Parse every line of a videos file.
///
/// Malformed lines are logged and skipped; only read errors fail.
pub fn parse_catalog<R: BufRead>(reader: R) -> io::Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Some(video) => videos.push(video),
            None => log::warn!("Skipping malformed line {}: {:?}", line_no + 1, line),
        }
    }

    log::debug!("Parsed {} videos", videos.len());
    Ok(videos)
}

/// Parse `title | id | tag, tag`. The tag field may be missing or empty.
pub fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|s| !s.is_empty())?;
    let id = fields.next().filter(|s| !s.is_empty())?;
    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
