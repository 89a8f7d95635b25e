//! Placeholder scanning
//!
//! Compiles the left delimiter, key pattern, and right delimiter into a
//! single regex and finds placeholder occurrences in a line of text.

use log::debug;
use regex::Regex;

use crate::error::FillinError;

/// A single placeholder occurrence within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch<'t> {
    /// The captured key text, delimiters excluded
    pub key: &'t str,
    /// Byte offset of the match start (left delimiter included)
    pub start: usize,
    /// Byte offset one past the match end (right delimiter included)
    pub end: usize,
}

/// Finds `left + key + right` occurrences in lines of text
///
/// Delimiters are matched verbatim; only the key pattern is interpreted as
/// regex syntax. Matching never spans line boundaries.
pub struct PlaceholderMatcher {
    re: Regex,
}

impl PlaceholderMatcher {
    /// Compile a matcher from literal delimiters and a key pattern fragment
    pub fn new(left: &str, right: &str, key_pattern: &str) -> Result<Self, FillinError> {
        // Reject a broken key pattern on its own, so the error names what
        // the user actually typed rather than the assembled expression.
        Regex::new(key_pattern).map_err(|e| FillinError::key_pattern(key_pattern, e))?;

        let assembled = format!(
            "{}(?P<key>{}){}",
            regex::escape(left),
            key_pattern,
            regex::escape(right)
        );
        let re = Regex::new(&assembled).map_err(|e| FillinError::key_pattern(key_pattern, e))?;

        debug!("compiled placeholder pattern: {}", assembled);
        Ok(Self { re })
    }

    /// Find all placeholder occurrences in a line, left to right
    ///
    /// Returns leftmost non-overlapping matches in order of appearance.
    pub fn find_in<'t>(&self, line: &'t str) -> Vec<PlaceholderMatch<'t>> {
        self.re
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let key = caps.name("key")?;
                Some(PlaceholderMatch {
                    key: key.as_str(),
                    start: whole.start(),
                    end: whole.end(),
                })
            })
            .collect()
    }
}
