//! Title search

use crate::model::Video;

/// Videos whose title matched a search term, sorted by title
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    pub term: String,
    videos: Vec<&'a Video>,
}

impl<'a> SearchResults<'a> {
    /// Match `term` against every title, ignoring case
    pub(crate) fn run(term: &str, videos: &'a [Video]) -> Self {
        let mut matches: Vec<&Video> = videos.iter().filter(|v| v.title_matches(term)).collect();
        sort_by_title(&mut matches);
        Self {
            term: term.to_string(),
            videos: matches,
        }
    }

    /// Matches paired with their 1-based selection number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a Video)> + '_ {
        self.videos.iter().enumerate().map(|(i, v)| (i + 1, *v))
    }

    /// The match at 1-based `number`
    pub fn get(&self, number: usize) -> Option<&'a Video> {
        number
            .checked_sub(1)
            .and_then(|i| self.videos.get(i))
            .copied()
    }

    pub fn videos(&self) -> &[&'a Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// Sort by title, case-sensitive, keeping the relative order of equal titles
pub(crate) fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title));
}

/// Turn a user's answer into a 1-based selection number.
///
/// Anything that is not a positive integer means "no selection".
pub fn parse_selection(answer: &str) -> Option<usize> {
    answer.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn videos() -> Vec<Video> {
        vec![
            Video::new("3", "another cat video", Vec::new()),
            Video::new("1", "Amazing Cat Video", Vec::new()),
            Video::new("2", "Funny Dogs", Vec::new()),
        ]
    }

    #[test]
    fn test_matches_are_sorted() {
        let videos = videos();
        let results = SearchResults::run("CAT", &videos);

        let titles: Vec<&str> = results.videos().iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, ["Amazing Cat Video", "another cat video"]);
    }

    #[test]
    fn test_numbering_is_one_based() {
        let videos = videos();
        let results = SearchResults::run("cat", &videos);

        assert_eq!(results.get(1).unwrap().id, "1");
        assert_eq!(results.get(2).unwrap().id, "3");
        assert!(results.get(0).is_none());
        assert!(results.get(3).is_none());

        let numbers: Vec<usize> = results.numbered().map(|(n, _)| n).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn test_no_matches() {
        let videos = videos();
        assert!(SearchResults::run("blah", &videos).is_empty());
    }

    #[test]
    fn test_sort_is_stable_for_equal_titles() {
        let videos = vec![
            Video::new("x", "Same", Vec::new()),
            Video::new("y", "Same", Vec::new()),
        ];
        let results = SearchResults::run("same", &videos);
        assert_eq!(results.get(1).unwrap().id, "x");
        assert_eq!(results.get(2).unwrap().id, "y");
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("2"), Some(2));
        assert_eq!(parse_selection(" 1 \n"), Some(1));
        assert_eq!(parse_selection("0"), None);
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection("no"), None);
        assert_eq!(parse_selection(""), None);
    }
}
