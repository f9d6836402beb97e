use std::path::Path;

use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

/// Render a path for the header, eliding leading components when the full
/// string would not fit the available width.
pub(crate) fn shortened_path(path: &Path, max_width: usize) -> String {
    let full = path.to_string_lossy();
    if full.chars().count() <= max_width || max_width < 4 {
        return full.into_owned();
    }
    let keep = max_width - 3;
    let tail: String = full
        .chars()
        .rev()
        .take(keep)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_paths_pass_through() {
        let path = Path::new("/music");
        assert_eq!(shortened_path(path, 20), "/music");
    }

    #[test]
    fn long_paths_keep_the_tail() {
        let path = Path::new("/home/musician/recordings/projects");
        let shown = shortened_path(path, 20);
        assert_eq!(shown.chars().count(), 20);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("projects"));
    }
}
