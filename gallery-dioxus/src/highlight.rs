//! Word-scoped highlighting of search matches inside photo titles.
//!
//! A title is split on single spaces; every word containing the search term
//! (case-insensitively, within a run of word characters) is emphasized as a
//! whole. Concatenating the returned segments always reproduces the title.

use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};

use crate::config::MatchMode;

/// A piece of a highlighted title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Emphasized(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Emphasized(text) => text,
        }
    }

    #[must_use]
    pub fn is_emphasized(&self) -> bool {
        matches!(self, Self::Emphasized(_))
    }
}

/// Decides whether a single word matches the search term.
enum WordMatcher {
    Literal(Vec<char>),
    Pattern(RegexMatcher),
}

impl WordMatcher {
    fn new(term: &str, mode: MatchMode) -> Self {
        if mode == MatchMode::Pattern {
            let pattern = format!(r"\b\w*(?:{term})\w*\b");
            match RegexMatcherBuilder::new()
                .case_insensitive(true)
                .build(&pattern)
            {
                Ok(matcher) => return Self::Pattern(matcher),
                Err(err) => {
                    log::warn!("Invalid search pattern {term:?}, matching literally: {err}");
                }
            }
        }
        Self::Literal(term.to_lowercase().chars().collect())
    }

    fn is_match(&self, word: &str) -> bool {
        match self {
            Self::Literal(term) => literal_word_match(word, term),
            Self::Pattern(matcher) => matcher.is_match(word.as_bytes()).unwrap_or(false),
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Literal form of `\b\w*<term>\w*\b`.
///
/// An occurrence at `i` matches when its left edge is either preceded by a
/// word character (the run then extends to a boundary) or starts with one,
/// and symmetrically on the right.
fn literal_word_match(word: &str, term: &[char]) -> bool {
    let (Some(&first), Some(&last)) = (term.first(), term.last()) else {
        return false;
    };
    let word: Vec<char> = word.to_lowercase().chars().collect();
    if term.len() > word.len() {
        return false;
    }

    word.windows(term.len()).enumerate().any(|(i, window)| {
        if window != term {
            return false;
        }
        let before = i.checked_sub(1).and_then(|j| word.get(j)).copied();
        let after = word.get(i + term.len()).copied();
        let left_ok = before.is_some_and(is_word_char) || is_word_char(first);
        let right_ok = after.is_some_and(is_word_char) || is_word_char(last);
        left_ok && right_ok
    })
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Plain(prev)) = segments.last_mut() {
        prev.push_str(text);
    } else {
        segments.push(Segment::Plain(text.to_string()));
    }
}

/// Highlight `term` in `title`, treating the term as literal text.
#[must_use]
pub fn highlight(title: &str, term: &str) -> Vec<Segment> {
    highlight_with(title, term, MatchMode::Literal)
}

/// Highlight `term` in `title` using the given match mode.
#[must_use]
pub fn highlight_with(title: &str, term: &str, mode: MatchMode) -> Vec<Segment> {
    if term.is_empty() {
        return vec![Segment::Plain(title.to_string())];
    }

    let matcher = WordMatcher::new(term, mode);
    let mut segments = Vec::new();
    let word_count = title.split(' ').count();

    for (i, word) in title.split(' ').enumerate() {
        if !word.is_empty() && matcher.is_match(word) {
            segments.push(Segment::Emphasized(word.to_string()));
        } else {
            push_plain(&mut segments, word);
        }
        if i + 1 < word_count {
            push_plain(&mut segments, " ");
        }
    }

    segments
}
