//! Overwrite protection for destination files
//!
//! A destination that turns out to be one of the files already read this
//! run is never clobbered silently; the write is gated behind an explicit
//! confirmation defaulting to no.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use log::debug;

use crate::interact::Interact;

/// Decision for one guarded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDecision {
    /// Destination coincides with no consumed source
    Unguarded,
    /// Coincidence confirmed by the human
    Confirmed,
    /// Coincidence declined; skip this write
    Declined,
}

impl WriteDecision {
    pub fn should_write(self) -> bool {
        !matches!(self, WriteDecision::Declined)
    }
}

/// Gate a write to `dest` against the `sources` consumed earlier
///
/// Paths are compared in canonical form (symlinks resolved). A destination
/// that does not exist yet cannot coincide with anything and is written
/// unconditionally. Comparison is by canonical path; case-insensitive
/// filesystems can alias paths this comparison does not equate.
pub fn check_overwrite(
    dest: &Path,
    sources: &[&Path],
    description: &str,
    io: &mut dyn Interact,
) -> Result<WriteDecision> {
    let Some(dest_canon) = canonical(dest) else {
        return Ok(WriteDecision::Unguarded);
    };

    let coincides = sources
        .iter()
        .filter_map(|source| canonical(source))
        .any(|source_canon| source_canon == dest_canon);

    if !coincides {
        return Ok(WriteDecision::Unguarded);
    }

    debug!("destination {} coincides with a consumed source", dest.display());
    let question = format!("Really overwrite {} {}?", description, dest.display());
    if io.confirm(&question, false)? {
        Ok(WriteDecision::Confirmed)
    } else {
        Ok(WriteDecision::Declined)
    }
}

fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::interact::testing::Scripted;

    #[test]
    fn test_nonexistent_destination_is_unguarded() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.txt");
        fs::write(&source, "text").unwrap();
        let dest = temp.path().join("out.txt");
        let mut io = Scripted::new(Vec::<String>::new());

        let decision = check_overwrite(&dest, &[source.as_path()], "text file", &mut io).unwrap();

        assert_eq!(decision, WriteDecision::Unguarded);
        assert!(io.confirms.is_empty());
    }

    #[test]
    fn test_distinct_existing_destination_is_unguarded() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.txt");
        let dest = temp.path().join("out.txt");
        fs::write(&source, "a").unwrap();
        fs::write(&dest, "b").unwrap();
        let mut io = Scripted::new(Vec::<String>::new());

        let decision = check_overwrite(&dest, &[source.as_path()], "text file", &mut io).unwrap();

        assert_eq!(decision, WriteDecision::Unguarded);
    }

    #[test]
    fn test_no_sources_is_unguarded() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.txt");
        fs::write(&dest, "b").unwrap();
        let mut io = Scripted::new(Vec::<String>::new());

        let decision = check_overwrite(&dest, &[], "data file", &mut io).unwrap();

        assert_eq!(decision, WriteDecision::Unguarded);
    }

    #[test]
    fn test_coinciding_paths_confirmed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inout.txt");
        fs::write(&path, "text").unwrap();
        let mut io = Scripted::new(["y"]);

        let decision = check_overwrite(&path, &[path.as_path()], "text file", &mut io).unwrap();

        assert_eq!(decision, WriteDecision::Confirmed);
        assert!(io.confirms[0].starts_with("Really overwrite text file"));
    }

    #[test]
    fn test_coinciding_paths_declined_by_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("inout.txt");
        fs::write(&path, "text").unwrap();
        // Empty answer takes the default, which is no
        let mut io = Scripted::new([""]);

        let decision = check_overwrite(&path, &[path.as_path()], "text file", &mut io).unwrap();

        assert_eq!(decision, WriteDecision::Declined);
        assert!(!decision.should_write());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_destination_coincides() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("in.txt");
        fs::write(&source, "text").unwrap();
        let link = temp.path().join("alias.txt");
        std::os::unix::fs::symlink(&source, &link).unwrap();
        let mut io = Scripted::new(["n"]);

        let decision = check_overwrite(&link, &[source.as_path()], "text file", &mut io).unwrap();

        assert_eq!(decision, WriteDecision::Declined);
    }
}
