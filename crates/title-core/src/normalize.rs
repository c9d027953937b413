//! Turns freeform model output into a clean, ordered list of titles.
//!
//! The model is asked for one title per line, but in practice it numbers the
//! lines, pads them with blank separators or leaves stray punctuation behind.
//! Normalization never fails: unusable output degrades to an empty list.

use lazy_static::lazy_static;
use regex::Regex;

/// Lines shorter than this (in characters, after trimming) are treated as noise.
pub const DEFAULT_MIN_TITLE_LEN: usize = 6;

lazy_static! {
    // "optional whitespace, one or more digits, `.` or `)`, optional whitespace"
    static ref ENUMERATION_MARKER: Regex =
        Regex::new(r"^\s*\d+[.)]\s*").expect("enumeration marker pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub min_len: usize,
    pub max_count: Option<usize>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_TITLE_LEN,
            max_count: None,
        }
    }
}

impl NormalizeOptions {
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }
}

/// Normalize with the default noise threshold and an optional cap.
pub fn normalize_titles(raw: &str, max_count: Option<usize>) -> Vec<String> {
    normalize(
        raw,
        NormalizeOptions {
            max_count,
            ..NormalizeOptions::default()
        },
    )
}

pub fn normalize(raw: &str, options: NormalizeOptions) -> Vec<String> {
    let titles = raw
        .lines()
        .map(strip_enumeration)
        .map(str::trim)
        .filter(|line| line.chars().count() >= options.min_len.max(1))
        .map(str::to_string);

    match options.max_count {
        Some(max) => titles.take(max).collect(),
        None => titles.collect(),
    }
}

fn strip_enumeration(line: &str) -> &str {
    match ENUMERATION_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}
