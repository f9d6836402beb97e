//! Domain models shared between the catalog scan and the TUI. The intent is
//! that these types stay light-weight data holders so other layers can focus
//! on scanning and presentation logic. Keeping the commentary here means
//! later refactors can reconstruct the assumptions even if other context is
//! lost.

use std::fmt;

/// Separator between the artist and the song title in a project folder name,
/// e.g. `Metallica - Enter Sandman`. The surrounding spaces are part of the
/// separator so hyphenated names like `Run-D.M.C.` survive intact.
pub const NAME_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One project folder underneath the root location. The raw folder name is
/// kept alongside the derived display fields because launching a project
/// needs the on-disk name, not the prettied-up split.
pub struct ProjectEntry {
    /// Directory name exactly as it appears on disk. Used to rebuild the
    /// folder path when opening the project and as the search target.
    pub folder_name: String,
    /// Left half of the folder name split, trimmed. Primary sort key.
    pub artist: String,
    /// Right half of the folder name split, trimmed.
    pub song: String,
}

impl ProjectEntry {
    /// Derive an entry from a folder name by splitting on `" - "`.
    ///
    /// Returns `None` unless the split yields exactly two non-empty trimmed
    /// segments; callers record those names as diagnostics instead of
    /// guessing at an artist/song assignment.
    pub fn from_folder_name(folder_name: &str) -> Option<Self> {
        let parts: Vec<&str> = folder_name
            .split(NAME_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.len() != 2 {
            return None;
        }

        Some(Self {
            folder_name: folder_name.to_string(),
            artist: parts[0].to_string(),
            song: parts[1].to_string(),
        })
    }

    /// Compose the `Artist - Song` string shown in the picker list.
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.artist, self.song)
    }
}

impl fmt::Display for ProjectEntry {
    /// Write the display title to any formatter so the type plays nicely
    /// with Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_artist_and_song() {
        let entry = ProjectEntry::from_folder_name("Metallica - Enter Sandman").unwrap();
        assert_eq!(entry.artist, "Metallica");
        assert_eq!(entry.song, "Enter Sandman");
        assert_eq!(entry.folder_name, "Metallica - Enter Sandman");
    }

    #[test]
    fn trims_segments() {
        let entry = ProjectEntry::from_folder_name("  Opeth  -  Ghost of Perdition  ").unwrap();
        assert_eq!(entry.artist, "Opeth");
        assert_eq!(entry.song, "Ghost of Perdition");
    }

    #[test]
    fn keeps_hyphenated_names_together() {
        let entry = ProjectEntry::from_folder_name("Run-D.M.C. - It's Tricky").unwrap();
        assert_eq!(entry.artist, "Run-D.M.C.");
        assert_eq!(entry.song, "It's Tricky");
    }

    #[test]
    fn rejects_names_without_separator() {
        assert!(ProjectEntry::from_folder_name("NoSeparatorHere").is_none());
    }

    #[test]
    fn rejects_too_many_segments() {
        assert!(ProjectEntry::from_folder_name("A - B - C").is_none());
    }

    #[test]
    fn rejects_blank_segments() {
        assert!(ProjectEntry::from_folder_name("Artist -  ").is_none());
        assert!(ProjectEntry::from_folder_name("  - Song").is_none());
    }

    #[test]
    fn display_title_joins_both_halves() {
        let entry = ProjectEntry::from_folder_name("Tool - Lateralus").unwrap();
        assert_eq!(entry.display_title(), "Tool - Lateralus");
        assert_eq!(entry.to_string(), "Tool - Lateralus");
    }
}
