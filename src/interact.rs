//! Terminal interaction
//!
//! Blocking "ask for text" and "ask yes/no" capabilities over the human's
//! terminal, behind a trait so the interaction protocol can be exercised
//! without a terminal.

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Blocking question-and-answer channel to the human
pub trait Interact {
    /// Show a line of source text before a prompt
    fn echo(&mut self, line: &str);

    /// Ask for one line of text; an empty answer takes `default` when offered
    fn ask(&mut self, key: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question; loops until an intelligible answer arrives
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Empty answers fall back to the offered default
pub(crate) fn normalize<'a>(answer: &'a str, default: Option<&'a str>) -> &'a str {
    if answer.is_empty() {
        default.unwrap_or(answer)
    } else {
        answer
    }
}

/// Accepts y/yes/n/no in any case; anything else is unintelligible
pub(crate) fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interactive terminal implementation backed by readline
pub struct TerminalInteract {
    rl: DefaultEditor,
}

impl TerminalInteract {
    pub fn new() -> Result<Self> {
        let rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { rl })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.rl.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(eyre::eyre!("interrupted")),
            Err(ReadlineError::Eof) => Err(eyre::eyre!("standard input closed")),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

impl Interact for TerminalInteract {
    fn echo(&mut self, line: &str) {
        println!("{}", line.dimmed());
    }

    fn ask(&mut self, key: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(d) => format!("{} [{}]: ", key.cyan(), d),
            None => format!("{}: ", key.cyan()),
        };
        let line = self.read_line(&prompt)?;
        if !line.is_empty() {
            let _ = self.rl.add_history_entry(line.as_str());
        }
        Ok(normalize(&line, default).to_string())
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let line = self.read_line(&format!("{} {} ", question, hint))?;
            if line.is_empty() {
                return Ok(default);
            }
            if let Some(parsed) = parse_yes_no(&line) {
                return Ok(parsed);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Scripted stand-in for the terminal
    ///
    /// Pops pre-baked answers in order and records what was asked.
    pub struct Scripted {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
        pub confirms: Vec<String>,
        pub echoed: Vec<String>,
    }

    impl Scripted {
        pub fn new<I>(answers: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                prompts: Vec::new(),
                confirms: Vec::new(),
                echoed: Vec::new(),
            }
        }

        pub fn exhausted(&self) -> bool {
            self.answers.is_empty()
        }
    }

    impl Interact for Scripted {
        fn echo(&mut self, line: &str) {
            self.echoed.push(line.to_string());
        }

        fn ask(&mut self, key: &str, default: Option<&str>) -> Result<String> {
            self.prompts.push(match default {
                Some(d) => format!("{} [{}]", key, d),
                None => key.to_string(),
            });
            let raw = self
                .answers
                .pop_front()
                .ok_or_else(|| eyre::eyre!("script ran out of answers at prompt for {}", key))?;
            Ok(normalize(&raw, default).to_string())
        }

        fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
            self.confirms.push(question.to_string());
            loop {
                let raw = self
                    .answers
                    .pop_front()
                    .ok_or_else(|| eyre::eyre!("script ran out of answers at confirm: {}", question))?;
                if raw.is_empty() {
                    return Ok(default);
                }
                if let Some(parsed) = parse_yes_no(&raw) {
                    return Ok(parsed);
                }
            }
        }
    }
}
