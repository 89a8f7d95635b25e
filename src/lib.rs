//! fillin - interactive placeholder filler for text files
//!
//! Scans a text file for delimited placeholders (`$<NAME>` by default),
//! prompts for a value for each key, and writes the filled-in result.
//! Collected values can be persisted to a YAML/JSON file and fed back into
//! later runs as prompt defaults.
//!
//! # Architecture
//!
//! ```text
//! input lines ──► rewrite ──► output lines ──► guard ──► output file / stdout
//!                    │
//!              matcher + resolve
//!                    │
//!               value store ◄── load file          store ──► guard ──► save file
//! ```
//!
//! # Example
//!
//! ```ignore
//! use fillin::{PlaceholderMatcher, ResolveContext, ValueStore};
//! use fillin::rewrite::{rewrite_lines, split_lines};
//!
//! let matcher = PlaceholderMatcher::new("$<", ">", r"\w+")?;
//! let mut ctx = ResolveContext::new(ValueStore::default(), true, true);
//! let lines = split_lines("Hello, $<NAME>!\n");
//! let outcome = rewrite_lines(&lines, &matcher, &mut ctx, &mut io)?;
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod guard;
pub mod interact;
pub mod matcher;
pub mod resolve;
pub mod rewrite;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::FillinError;
pub use interact::{Interact, TerminalInteract};
pub use matcher::{PlaceholderMatch, PlaceholderMatcher};
pub use resolve::{Resolution, ResolveContext};
pub use rewrite::Rewrite;
pub use session::{RunOutcome, Session};
pub use store::ValueStore;

/// Default literal text opening a placeholder
pub const DEFAULT_LEFT_DELIMITER: &str = "$<";

/// Default literal text closing a placeholder
pub const DEFAULT_RIGHT_DELIMITER: &str = ">";

/// Default regex fragment matched as the placeholder key
pub const DEFAULT_KEY_PATTERN: &str = r"\w+";
