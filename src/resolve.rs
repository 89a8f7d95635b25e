//! Interaction protocol for resolving one placeholder key
//!
//! Decides whether to prompt, classifies the answer forms (plain value,
//! `+`-prefixed override, abort token), and loops until a usable answer or
//! a confirmed abort.

use eyre::Result;
use log::debug;

use crate::interact::Interact;
use crate::store::ValueStore;

/// Answers requesting early termination, matched exactly
const ABORT_TOKENS: [&str; 2] = [":a", ":q"];

/// Mutable state threaded through one run
#[derive(Debug)]
pub struct ResolveContext {
    pub store: ValueStore,
    /// Prompt even when a stored value exists (offering it as the default)
    pub prompt_default: bool,
    /// Print the source line before prompting
    pub prompt_echo: bool,
}

impl ResolveContext {
    pub fn new(store: ValueStore, prompt_default: bool, prompt_echo: bool) -> Self {
        Self {
            store,
            prompt_default,
            prompt_echo,
        }
    }
}

/// One classified human answer
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    /// Exact abort token, pending confirmation
    Abort,
    /// `+`-prefixed: remainder overwrites any stored value
    Override(String),
    /// Anything else: used as-is, stored only if the key had no value
    Plain(String),
}

fn classify(raw: &str) -> Answer {
    if ABORT_TOKENS.contains(&raw) {
        Answer::Abort
    } else if let Some(rest) = raw.strip_prefix('+') {
        Answer::Override(rest.to_string())
    } else {
        Answer::Plain(raw.to_string())
    }
}

/// Outcome of resolving one placeholder occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Text to splice in place of the placeholder
    Value(String),
    /// The human confirmed an abort; the run must end with zero writes
    Aborted,
}

/// Resolve one occurrence of `key` appearing in `line`
///
/// Mutates the store per the answer form. The only looping case is a
/// declined abort, which re-prompts from the echo step.
pub fn resolve_key(
    key: &str,
    line: &str,
    ctx: &mut ResolveContext,
    io: &mut dyn Interact,
) -> Result<Resolution> {
    let current = ctx.store.get(key).map(str::to_string);

    if !ctx.prompt_default
        && let Some(value) = current.as_deref()
    {
        debug!("reusing stored value for {}", key);
        return Ok(Resolution::Value(value.to_string()));
    }

    loop {
        if ctx.prompt_echo {
            io.echo(line);
        }
        let raw = io.ask(key, current.as_deref())?;

        match classify(&raw) {
            Answer::Abort => {
                if io.confirm("Really abort?", false)? {
                    debug!("abort confirmed at key {}", key);
                    return Ok(Resolution::Aborted);
                }
                // Declined: the attempt does not count as an answer.
            }
            Answer::Override(value) => {
                ctx.store.force_set(key, &value);
                return Ok(Resolution::Value(value));
            }
            Answer::Plain(value) => {
                ctx.store.set_if_absent(key, &value);
                return Ok(Resolution::Value(value));
            }
        }
    }
}
