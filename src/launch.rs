//! Shell-opens the files that make up a project: the REAPER project itself
//! and, when present, a Guitar Pro tab next to it. Opening is fire-and-forget
//! through the OS default-application mechanism; whether the launched
//! application comes up successfully is not observable from here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use open::that as open_with_default_app;
use thiserror::Error;

use crate::models::ProjectEntry;

/// File suffixes that get opened when launching a project, matched
/// case-sensitively and independently of each other.
pub const LAUNCH_SUFFIXES: [&str; 2] = [".rpp", ".gp"];

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to read project folder: {0}")]
    ReadFolder(#[from] io::Error),
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
}

/// List the immediate files of `project_dir` that qualify for launching,
/// sorted by name so multi-file opens happen in a predictable order. Never
/// recurses into subdirectories.
pub fn launchable_files(project_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir_entry in fs::read_dir(project_dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type()?.is_file() {
            continue;
        }
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if LAUNCH_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            files.push(dir_entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Request an OS default-application open for every launchable file in the
/// entry's folder. Returns the number of open requests issued; zero means
/// the folder held nothing worth opening, which callers surface as a status
/// message rather than an error.
pub fn open_project(root: &Path, entry: &ProjectEntry) -> Result<usize, LaunchError> {
    let project_dir = root.join(&entry.folder_name);
    let files = launchable_files(&project_dir)?;

    let mut opened = 0;
    for file in files {
        open_with_default_app(&file).map_err(|source| LaunchError::Open {
            path: file.clone(),
            source,
        })?;
        opened += 1;
    }
    Ok(opened)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_project_and_tab_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.rpp"), "").unwrap();
        fs::write(dir.path().join("a.gp"), "").unwrap();
        fs::write(dir.path().join("mix-notes.txt"), "").unwrap();

        let files = launchable_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.gp"));
        assert!(files[1].ends_with("a.rpp"));
    }

    #[test]
    fn empty_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        assert!(launchable_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SONG.RPP"), "").unwrap();
        fs::write(dir.path().join("tab.GP"), "").unwrap();

        assert!(launchable_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("renders");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("bounce.rpp"), "").unwrap();

        assert!(launchable_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(launchable_files(&dir.path().join("gone")).is_err());
    }
}
