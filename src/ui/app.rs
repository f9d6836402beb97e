use std::mem;
use std::path::Path;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
    Wrap,
};
use ratatui::Frame;

use crate::catalog::{Catalog, CatalogState};
use crate::launch::open_project;
use crate::models::ProjectEntry;

use super::forms::LocationForm;
use super::helpers::{centered_rect, shortened_path, surface_error};

/// Header space reserved for the active location.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// The two ways of browsing the same catalog. The table shows artist and
/// song as separate columns with a live search; the picker is a flat list of
/// `Artist - Song` lines for quickly stepping through with the arrow keys.
enum Screen {
    Table,
    Picker,
}

/// Fine-grained modes layered over the current screen.
enum Mode {
    Normal,
    Searching(SearchState),
    ChangingLocation(LocationForm),
}

/// State for an active inline search.
struct SearchState {
    query: String,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    catalog: Catalog,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
    filter: Option<String>,
    selected: usize,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let mut app = Self {
            catalog,
            screen: Screen::Table,
            mode: Mode::Normal,
            status: None,
            filter: None,
            selected: 0,
        };
        if let Some(note) = app.skipped_note() {
            app.set_status(note, StatusKind::Info);
        }
        app
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Searching(state) => self.handle_search(code, state),
            Mode::ChangingLocation(form) => self.handle_change_location(code, form)?,
        };

        Ok(exit)
    }

    /// Ctrl+L works from any mode and always jumps straight to the
    /// change-location form, discarding whatever modal was open.
    pub(crate) fn handle_ctrl_l(&mut self) {
        self.clear_status();
        self.mode = Mode::ChangingLocation(LocationForm::from_current(self.catalog.root()));
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc => {
                // Esc first clears an active filter; a second press quits.
                if self.filter.is_some() {
                    self.filter = None;
                    self.clamp_selection();
                    self.set_status("Search cleared.", StatusKind::Info);
                } else {
                    *exit = true;
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.screen = match self.screen {
                    Screen::Table => Screen::Picker,
                    Screen::Picker => Screen::Table,
                };
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('f') | KeyCode::Char('/') => {
                if matches!(self.screen, Screen::Table) {
                    self.clear_status();
                    return Mode::Searching(SearchState {
                        query: self.filter.clone().unwrap_or_default(),
                    });
                }
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.clear_status();
                return Mode::ChangingLocation(LocationForm::from_current(self.catalog.root()));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.rescan(),
            _ => {}
        }
        Mode::Normal
    }

    /// The filter applies live on every keystroke, matching how the original
    /// search box narrowed the table as the user typed.
    fn handle_search(&mut self, code: KeyCode, mut state: SearchState) -> Mode {
        match code {
            KeyCode::Esc => {
                self.filter = None;
                self.clamp_selection();
                return Mode::Normal;
            }
            KeyCode::Enter => {
                self.apply_filter(&state.query);
                return Mode::Normal;
            }
            KeyCode::Backspace => {
                state.query.pop();
            }
            KeyCode::Char(ch) if !ch.is_control() => state.query.push(ch),
            _ => {}
        }

        self.apply_filter(&state.query);
        Mode::Searching(state)
    }

    fn handle_change_location(&mut self, code: KeyCode, mut form: LocationForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Location change cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_input() {
                Ok(path) => match self.apply_root(&path) {
                    Ok(true) => keep_open = false,
                    Ok(false) => {
                        let message = format!("Directory does not exist: {}", path.display());
                        form.error = Some(message);
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                },
                Err(err) => {
                    form.error = Some(surface_error(&err));
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::ChangingLocation(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Install and persist a new root. Returns `Ok(false)` when the path does
    /// not exist so the form can stay open with an inline error.
    fn apply_root(&mut self, path: &Path) -> Result<bool> {
        let change = self.catalog.set_root(path, true)?;
        if change.state == CatalogState::Unset {
            return Ok(false);
        }

        self.filter = None;
        self.selected = 0;

        if let Some(err) = change.persist_error {
            // The location still applies for this session even when it
            // could not be written to disk.
            self.set_status(
                format!("Location applied, but saving it failed: {err}"),
                StatusKind::Error,
            );
        } else {
            let (text, kind) = self.scan_summary(change.state);
            self.set_status(text, kind);
        }
        Ok(true)
    }

    fn rescan(&mut self) {
        match self.catalog.refresh() {
            Ok(CatalogState::Unset) => {
                self.set_status(
                    "No location selected. Press [c] to choose one.",
                    StatusKind::Error,
                );
            }
            Ok(state) => {
                self.clamp_selection();
                let (text, kind) = self.scan_summary(state);
                self.set_status(text, kind);
            }
            Err(err) => {
                self.selected = 0;
                self.set_status(format!("Rescan failed: {err}"), StatusKind::Error);
            }
        }
    }

    fn open_selected(&mut self) {
        let Some(root) = self.catalog.root().map(Path::to_path_buf) else {
            self.set_status(
                "No location selected. Press [c] to choose one.",
                StatusKind::Error,
            );
            return;
        };
        let Some(entry) = self.current_entry().cloned() else {
            self.set_status("No project selected to open.", StatusKind::Error);
            return;
        };

        match open_project(&root, &entry) {
            Ok(0) => self.set_status(
                format!("Nothing to open in {}.", entry.folder_name),
                StatusKind::Error,
            ),
            Ok(count) => self.set_status(
                format!("Opened {count} file(s) for {}.", entry.display_title()),
                StatusKind::Info,
            ),
            Err(err) => self.set_status(
                format!("Failed to open {}: {err}", entry.display_title()),
                StatusKind::Error,
            ),
        }
    }

    /// Entries that pass the active filter, in catalog (artist) order. The
    /// match runs against the raw folder name, case-insensitively, the same
    /// target the original search box used.
    fn visible_entries(&self) -> Vec<&ProjectEntry> {
        let entries = self.catalog.entries();
        match &self.filter {
            Some(query) => {
                let needle = query.to_lowercase();
                entries
                    .iter()
                    .filter(|entry| entry.folder_name.to_lowercase().contains(&needle))
                    .collect()
            }
            None => entries.iter().collect(),
        }
    }

    fn current_entry(&self) -> Option<&ProjectEntry> {
        self.visible_entries().get(self.selected).copied()
    }

    fn apply_filter(&mut self, query: &str) {
        self.filter = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_string())
        };
        self.clamp_selection();
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.visible_entries().len();
        if len == 0 {
            return;
        }
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len as isize {
            new = len as isize - 1;
        }
        self.selected = new as usize;
    }

    fn select_first(&mut self) {
        self.selected = 0;
    }

    fn select_last(&mut self) {
        let len = self.visible_entries().len();
        if len > 0 {
            self.selected = len - 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn scan_summary(&self, state: CatalogState) -> (String, StatusKind) {
        match state {
            CatalogState::Unset => (
                "No location selected.".to_string(),
                StatusKind::Error,
            ),
            CatalogState::Empty => ("No projects found.".to_string(), StatusKind::Info),
            CatalogState::Populated => {
                let mut text = format!("Found {} project(s).", self.catalog.entries().len());
                if let Some(note) = self.skipped_note() {
                    text.push(' ');
                    text.push_str(&note);
                }
                (text, StatusKind::Info)
            }
        }
    }

    /// Diagnostic for folders that qualified as projects but whose names did
    /// not split into an `Artist - Song` pair.
    fn skipped_note(&self) -> Option<String> {
        let skipped = self.catalog.skipped();
        if skipped.is_empty() {
            return None;
        }
        Some(format!(
            "Skipped {} folder(s) without an Artist - Song name: {}.",
            skipped.len(),
            skipped.join(", ")
        ))
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT.min(area.height)),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT.min(area.height)),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        match self.screen {
            Screen::Table => self.draw_table(frame, chunks[1]),
            Screen::Picker => self.draw_picker(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::Searching(state) => self.draw_search_bar(frame, area, state),
            Mode::ChangingLocation(form) => self.draw_location_form(frame, area, form),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Location");
        let inner_width = area.width.saturating_sub(2) as usize;

        let mut spans = Vec::new();
        match self.catalog.root() {
            Some(root) => spans.push(Span::raw(shortened_path(
                root,
                inner_width.saturating_sub(24),
            ))),
            None => spans.push(Span::styled(
                "Select location...",
                Style::default().fg(Color::DarkGray),
            )),
        }
        if let Some(filter) = &self.filter {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("Filter: {filter}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        if let Some(message) = self.placeholder_message() {
            let placeholder = Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Projects"));
            frame.render_widget(placeholder, area);
            return;
        }

        let visible = self.visible_entries();
        let rows: Vec<Row> = visible
            .iter()
            .map(|entry| {
                Row::new(vec![
                    Cell::from(entry.artist.as_str()),
                    Cell::from(entry.song.as_str()),
                ])
            })
            .collect();

        // Artist gets a sized column, song stretches, mirroring the
        // resize-to-contents / stretch split of the original table.
        let widths = [Constraint::Length(28), Constraint::Min(1)];
        let table = Table::new(rows, widths)
            .header(
                Row::new(["Artist", "Song"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Projects ({})", visible.len())),
            )
            .row_highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut table_state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn draw_picker(&self, frame: &mut Frame, area: Rect) {
        if let Some(message) = self.placeholder_message() {
            let placeholder = Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Pick a song"));
            frame.render_widget(placeholder, area);
            return;
        }

        let visible = self.visible_entries();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|entry| ListItem::new(entry.display_title()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Pick a song ({})", visible.len())),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Text for the content area when there are no rows to show, or `None`
    /// when the entry list should render.
    fn placeholder_message(&self) -> Option<&'static str> {
        match self.catalog.state() {
            CatalogState::Unset => {
                Some("No location selected. Press [c] to choose your projects folder.")
            }
            CatalogState::Empty => Some("No projects found."),
            CatalogState::Populated => {
                if self.visible_entries().is_empty() {
                    Some("No projects match the current search.")
                } else {
                    None
                }
            }
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Searching(_)) => Line::from(vec![
                Span::styled("[Type]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Keep   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            (_, Mode::ChangingLocation(_)) => Line::from(vec![
                Span::styled("[Type]", key_style),
                Span::raw(" Path   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Apply   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Table, Mode::Normal) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[f]", key_style),
                Span::raw(" Search   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Picker   "),
                Span::styled("[c]", key_style),
                Span::raw(" Location   "),
                Span::styled("[r]", key_style),
                Span::raw(" Rescan   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Picker, Mode::Normal) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Table   "),
                Span::styled("[c]", key_style),
                Span::raw(" Location   "),
                Span::styled("[r]", key_style),
                Span::raw(" Rescan   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, state: &SearchState) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", state.query)))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Search: ".len() as u16 + state.query.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_location_form(&self, frame: &mut Frame, area: Rect, form: &LocationForm) {
        let popup_area = centered_rect(70, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Change Location")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            Line::from(format!("Path: {}", form.path)),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to apply, Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + "Path: ".len() as u16 + form.path.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::store::LocationStore;

    fn project(root: &Path, folder: &str) {
        let dir = root.join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("song.rpp"), "").unwrap();
    }

    fn app_with_root(tmp: &Path) -> App {
        let root = tmp.join("music");
        project(&root, "Metallica - Enter Sandman");
        project(&root, "Opeth - Windowpane");
        project(&root, "Tool - Lateralus");

        let store = LocationStore::new(tmp.join("appdata"));
        let mut catalog = Catalog::new(store);
        catalog.set_root(&root, false).unwrap();
        App::new(catalog)
    }

    fn type_string(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    #[test]
    fn search_filters_on_folder_name() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_with_root(tmp.path());

        app.handle_key(KeyCode::Char('f')).unwrap();
        type_string(&mut app, "metallica");
        app.handle_key(KeyCode::Enter).unwrap();

        let visible = app.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].artist, "Metallica");
    }

    #[test]
    fn selection_stays_in_bounds_when_the_filter_shrinks() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_with_root(tmp.path());

        app.handle_key(KeyCode::End).unwrap();
        assert_eq!(app.selected, 2);

        app.handle_key(KeyCode::Char('f')).unwrap();
        type_string(&mut app, "opeth");

        assert_eq!(app.selected, 0);
        assert_eq!(app.current_entry().unwrap().artist, "Opeth");
    }

    #[test]
    fn esc_clears_the_filter_before_quitting() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_with_root(tmp.path());

        app.handle_key(KeyCode::Char('f')).unwrap();
        type_string(&mut app, "tool");
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.visible_entries().len(), 1);

        let exited = app.handle_key(KeyCode::Esc).unwrap();
        assert!(!exited);
        assert_eq!(app.visible_entries().len(), 3);

        let exited = app.handle_key(KeyCode::Esc).unwrap();
        assert!(exited);
    }

    #[test]
    fn change_location_applies_a_valid_path() {
        let tmp = tempfile::tempdir().unwrap();
        let other_root = tmp.path().join("other");
        project(&other_root, "Baroness - Isak");

        let store = LocationStore::new(tmp.path().join("appdata"));
        let mut app = App::new(Catalog::new(store));
        assert_eq!(app.catalog.state(), CatalogState::Unset);

        app.handle_key(KeyCode::Char('c')).unwrap();
        type_string(&mut app, &other_root.to_string_lossy());
        app.handle_key(KeyCode::Enter).unwrap();

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.catalog.state(), CatalogState::Populated);
        assert_eq!(app.visible_entries().len(), 1);

        // The change also landed on disk.
        let saved = LocationStore::new(tmp.path().join("appdata")).load().unwrap();
        assert_eq!(saved, std::path::absolute(&other_root).unwrap());
    }

    #[test]
    fn change_location_keeps_the_form_open_for_a_missing_path() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_with_root(tmp.path());

        app.handle_key(KeyCode::Char('c')).unwrap();
        // Wipe the prefilled path, then enter a bogus one.
        for _ in 0..200 {
            app.handle_key(KeyCode::Backspace).unwrap();
        }
        type_string(&mut app, "/definitely/not/here");
        app.handle_key(KeyCode::Enter).unwrap();

        match &app.mode {
            Mode::ChangingLocation(form) => assert!(form.error.is_some()),
            _ => panic!("form should stay open on a missing path"),
        }
        // The previous catalog was reset by the failed change.
        assert_eq!(app.catalog.state(), CatalogState::Unset);
    }

    #[test]
    fn tab_toggles_between_table_and_picker() {
        let tmp = tempfile::tempdir().unwrap();
        let mut app = app_with_root(tmp.path());

        assert!(matches!(app.screen, Screen::Table));
        app.handle_key(KeyCode::Tab).unwrap();
        assert!(matches!(app.screen, Screen::Picker));
        app.handle_key(KeyCode::Tab).unwrap();
        assert!(matches!(app.screen, Screen::Table));
    }

    #[test]
    fn skipped_folders_surface_as_a_startup_diagnostic() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("music");
        project(&root, "Bad Folder");

        let store = LocationStore::new(tmp.path().join("appdata"));
        let mut catalog = Catalog::new(store);
        catalog.set_root(&root, false).unwrap();

        let app = App::new(catalog);
        let status = app.status.as_ref().expect("diagnostic status expected");
        assert!(status.text.contains("Bad Folder"));
    }
}
