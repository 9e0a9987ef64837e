//! Candidate extraction from file content
//!
//! The default extractor splits on whitespace plus quoting and markup
//! delimiters, so `<div class="h-128 w-128">` yields `div`, `class`,
//! `h-128`, `w-128`. Every contiguous non-delimiter run is a candidate;
//! deciding which ones are utilities happens later.

use regex::Regex;

/// Characters that end a candidate besides whitespace
pub const DELIMITERS: &[char] = &['"', '\'', '`', '<', '>', '=', '{', '}', ';', ','];

/// Splits content into candidate fragments
#[derive(Debug, Clone, Default)]
pub enum Extractor {
    /// Split on whitespace and [`DELIMITERS`]
    #[default]
    Delimited,

    /// Every match of a custom regex is a candidate
    Pattern(Regex),
}

impl Extractor {
    /// Build an extractor from an optional custom regex
    pub fn from_pattern(pattern: Option<&str>) -> Result<Self, regex::Error> {
        pattern.map_or(Ok(Self::Delimited), |p| Regex::new(p).map(Self::Pattern))
    }

    /// Extract candidate fragments, in order of appearance
    #[must_use]
    pub fn extract<'a>(&self, content: &'a str) -> Vec<&'a str> {
        match self {
            Self::Delimited => content
                .split(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
                .filter(|s| !s.is_empty())
                .collect(),
            Self::Pattern(regex) => regex
                .find_iter(content)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}
