//! Line-by-line rewrite pass
//!
//! Splits input text into terminator-preserving lines, then substitutes
//! every placeholder occurrence while leaving all other bytes untouched.

use eyre::Result;
use log::debug;

use crate::interact::Interact;
use crate::matcher::PlaceholderMatcher;
use crate::resolve::{Resolution, ResolveContext, resolve_key};

/// Outcome of one full rewrite pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Output lines, same count and order as the input
    Completed(Vec<String>),
    /// A confirmed abort; accumulated output is discarded
    Aborted,
}

/// Split text into lines that keep their original terminators
///
/// Joining the result back with no separator reproduces the input
/// byte-for-byte.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

/// Rewrite every line, resolving placeholders strictly in order
///
/// Lines are processed sequentially and matches within a line left to
/// right; later occurrences of a key see store mutations made by earlier
/// ones.
pub fn rewrite_lines(
    lines: &[String],
    matcher: &PlaceholderMatcher,
    ctx: &mut ResolveContext,
    io: &mut dyn Interact,
) -> Result<Rewrite> {
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        let matches = matcher.find_in(line);
        if matches.is_empty() {
            out.push(line.clone());
            continue;
        }
        debug!("{} placeholder(s) in line", matches.len());

        let display = line.trim_end_matches(['\r', '\n']);
        let mut rebuilt = String::with_capacity(line.len());
        let mut last = 0;

        for m in matches {
            rebuilt.push_str(&line[last..m.start]);
            match resolve_key(m.key, display, ctx, io)? {
                Resolution::Value(value) => rebuilt.push_str(&value),
                Resolution::Aborted => return Ok(Rewrite::Aborted),
            }
            last = m.end;
        }
        rebuilt.push_str(&line[last..]);
        out.push(rebuilt);
    }

    Ok(Rewrite::Completed(out))
}
