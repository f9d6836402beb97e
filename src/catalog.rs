//! The project catalog: scans the root location for song-project folders and
//! keeps the derived entry list that both screens render. There is no
//! caching layer on purpose; a scan touches one directory level and is cheap
//! enough to redo on every root change or refresh.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::ProjectEntry;
use crate::store::{LocationStore, StoreError};

/// File suffix that qualifies a folder as a REAPER project. Matched
/// case-sensitively against immediate files only.
pub const PROJECT_SUFFIX: &str = ".rpp";
/// Folders with this prefix are reserved (archives, templates) and never
/// listed.
pub const RESERVED_PREFIX: &str = "__";

/// What the shell should render for the catalog as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    /// No valid root location; prompt the user to pick one.
    Unset,
    /// Valid root, zero qualifying project folders.
    Empty,
    /// At least one entry to show.
    Populated,
}

/// Outcome of a root change. A persist failure is carried alongside the new
/// state instead of erroring out because the in-memory location change must
/// stick regardless.
pub struct RootChange {
    pub state: CatalogState,
    pub persist_error: Option<StoreError>,
}

/// Result of one directory scan, before it is installed on the catalog.
struct ScanOutcome {
    entries: Vec<ProjectEntry>,
    skipped: Vec<String>,
}

pub struct Catalog {
    store: LocationStore,
    root: Option<PathBuf>,
    entries: Vec<ProjectEntry>,
    skipped: Vec<String>,
}

impl Catalog {
    pub fn new(store: LocationStore) -> Self {
        Self {
            store,
            root: None,
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Build a catalog from the saved location, if one exists. The saved
    /// path is applied without re-persisting it; anything that goes wrong
    /// (stale path, unreadable directory) degrades to the unset state so
    /// startup never fails on catalog grounds.
    pub fn restore(store: LocationStore) -> Self {
        let mut catalog = Self::new(store);
        if let Some(saved) = catalog.store.load() {
            let _ = catalog.set_root(&saved, false);
        }
        catalog
    }

    /// Make `path` the active root and rescan.
    ///
    /// A path that does not exist (or is not a directory) clears the catalog
    /// to the unset state and leaves the persisted location untouched. A
    /// valid path is installed first and only then optionally persisted, so
    /// a failed save still leaves the catalog usable for this session.
    pub fn set_root(&mut self, path: &Path, persist: bool) -> io::Result<RootChange> {
        if !path.is_dir() {
            self.clear();
            return Ok(RootChange {
                state: CatalogState::Unset,
                persist_error: None,
            });
        }

        let outcome = match scan_projects(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.clear();
                return Err(err);
            }
        };

        self.root = Some(path.to_path_buf());
        self.entries = outcome.entries;
        self.skipped = outcome.skipped;

        let persist_error = if persist {
            self.store.save(path).err()
        } else {
            None
        };

        Ok(RootChange {
            state: self.state(),
            persist_error,
        })
    }

    /// Rescan under the current root. Falls back to unset if the root
    /// disappeared since the last scan.
    pub fn refresh(&mut self) -> io::Result<CatalogState> {
        match self.root.clone() {
            Some(root) => Ok(self.set_root(&root, false)?.state),
            None => Ok(CatalogState::Unset),
        }
    }

    pub fn state(&self) -> CatalogState {
        match (&self.root, self.entries.is_empty()) {
            (None, _) => CatalogState::Unset,
            (Some(_), true) => CatalogState::Empty,
            (Some(_), false) => CatalogState::Populated,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    /// Folder names that qualified as projects but did not parse into an
    /// `Artist - Song` pair during the last scan. Surfaced as a diagnostic.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    fn clear(&mut self) {
        self.root = None;
        self.entries.clear();
        self.skipped.clear();
    }
}

/// Enumerate the qualifying project folders directly under `root`.
///
/// Immediate subdirectories only; reserved names and folders without a
/// `.rpp` file are dropped, the rest are parsed into entries or recorded as
/// skipped. Directory names are pre-sorted so the final artist ordering is
/// deterministic across platforms, then entries are stably sorted by artist,
/// case-insensitively.
fn scan_projects(root: &Path) -> io::Result<ScanOutcome> {
    let mut folder_names = Vec::new();
    for dir_entry in fs::read_dir(root)? {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type()?.is_dir() {
            continue;
        }
        folder_names.push(dir_entry.file_name().to_string_lossy().into_owned());
    }
    folder_names.sort();

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for name in folder_names {
        if name.starts_with(RESERVED_PREFIX) {
            continue;
        }
        if !has_project_file(&root.join(&name)) {
            continue;
        }
        match ProjectEntry::from_folder_name(&name) {
            Some(entry) => entries.push(entry),
            None => skipped.push(name),
        }
    }

    entries.sort_by_key(|entry| entry.artist.to_lowercase());

    Ok(ScanOutcome { entries, skipped })
}

/// True if `dir` contains at least one immediate file ending in `.rpp`.
/// An unreadable folder simply does not qualify.
fn has_project_file(dir: &Path) -> bool {
    let Ok(dir_entries) = fs::read_dir(dir) else {
        return false;
    };
    dir_entries.flatten().any(|dir_entry| {
        dir_entry.file_type().map(|ty| ty.is_file()).unwrap_or(false)
            && dir_entry
                .file_name()
                .to_string_lossy()
                .ends_with(PROJECT_SUFFIX)
    })
}
