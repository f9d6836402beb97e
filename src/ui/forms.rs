use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

/// Input state for the change-location modal. A single free-text path field;
/// validation against the filesystem happens when the form is submitted, not
/// per keystroke.
#[derive(Default, Clone)]
pub(crate) struct LocationForm {
    pub(crate) path: String,
    pub(crate) error: Option<String>,
}

impl LocationForm {
    /// Prefill the form with the active root so small corrections don't
    /// require retyping the whole path.
    pub(crate) fn from_current(root: Option<&Path>) -> Self {
        Self {
            path: root
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_default(),
            error: None,
        }
    }

    /// Append a character to the path field, rejecting control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.path.push(ch);
        true
    }

    /// Remove the last character from the path field.
    pub(crate) fn backspace(&mut self) {
        self.path.pop();
    }

    /// Validate the input and return the typed path ready to apply.
    pub(crate) fn parse_input(&self) -> Result<PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("A folder path is required."));
        }
        Ok(PathBuf::from(trimmed))
    }
}
