//! One end-to-end run
//!
//! Seeds the value store, rewrites the input, then performs the guarded
//! writes. File writes happen only after the rewrite pass completes, so a
//! confirmed abort can never leave a partial file behind.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use eyre::{Context, Result};
use log::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::data;
use crate::guard::check_overwrite;
use crate::interact::Interact;
use crate::matcher::PlaceholderMatcher;
use crate::resolve::ResolveContext;
use crate::rewrite::{Rewrite, rewrite_lines, split_lines};
use crate::store::ValueStore;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The human confirmed an abort; nothing was written
    Aborted,
}

/// A single interactive fill-in run
pub struct Session {
    config: Config,
    input: PathBuf,
    output: Option<PathBuf>,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
}

impl Session {
    pub fn from_cli(config: Config, cli: &Cli) -> Self {
        Self {
            config,
            input: cli.input.clone(),
            output: cli.output.clone(),
            load: cli.load.clone(),
            save: cli.save.clone(),
        }
    }

    /// Run to completion or confirmed abort
    pub fn run(&self, io: &mut dyn Interact) -> Result<RunOutcome> {
        let matcher = PlaceholderMatcher::new(
            &self.config.left_delimiter,
            &self.config.right_delimiter,
            &self.config.key_pattern,
        )?;

        let store = match &self.load {
            Some(path) => data::load_store(path)
                .context(format!("Failed to load values from {}", path.display()))?,
            None => ValueStore::default(),
        };

        let text = fs::read_to_string(&self.input)
            .context(format!("Failed to read input file {}", self.input.display()))?;
        let lines = split_lines(&text);
        info!("processing {} line(s) from {}", lines.len(), self.input.display());

        let mut ctx = ResolveContext::new(store, self.config.prompt_default, self.config.prompt_echo);

        let output_lines = match rewrite_lines(&lines, &matcher, &mut ctx, io)? {
            Rewrite::Completed(lines) => lines,
            Rewrite::Aborted => return Ok(RunOutcome::Aborted),
        };

        self.write_output(&output_lines, io)?;
        self.write_store(&ctx.store, io)?;

        Ok(RunOutcome::Completed)
    }

    /// Write the rewritten text, guarded against clobbering the input
    fn write_output(&self, lines: &[String], io: &mut dyn Interact) -> Result<()> {
        let Some(dest) = &self.output else {
            // Stdout has no file identity, so no guard applies
            for line in lines {
                print!("{}", line);
            }
            return Ok(());
        };

        let decision = check_overwrite(dest, &[self.input.as_path()], "output file", io)?;
        if decision.should_write() {
            fs::write(dest, lines.concat())
                .context(format!("Failed to write output file {}", dest.display()))?;
            println!("{} Wrote {}", "✓".green(), dest.display());
        } else {
            println!("{}", format!("Discarded output for {}", dest.display()).dimmed());
        }
        Ok(())
    }

    /// Persist the value store, guarded against clobbering the load file
    fn write_store(&self, store: &ValueStore, io: &mut dyn Interact) -> Result<()> {
        let Some(dest) = &self.save else {
            return Ok(());
        };

        let sources: Vec<&std::path::Path> = self.load.iter().map(PathBuf::as_path).collect();
        let decision = check_overwrite(dest, &sources, "data file", io)?;
        if decision.should_write() {
            data::save_store(dest, store)
                .context(format!("Failed to save values to {}", dest.display()))?;
            println!("{} Saved {} value(s) to {}", "✓".green(), store.len(), dest.display());
        } else {
            println!("{}", format!("Discarded values for {}", dest.display()).dimmed());
        }
        Ok(())
    }
}
