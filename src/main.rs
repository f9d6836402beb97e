//! Binary entry point that glues the file-backed catalog to the TUI.
//! Summarizing the bootstrapping pipeline here keeps the intent obvious when
//! revisiting the code: we resolve the per-user data directory, restore the
//! last-used root location, and drive the Ratatui event loop until the user
//! exits.
use songlist::{run_app, App, Catalog, LocationStore};

/// Restore the saved location, build the catalog, and launch the Ratatui
/// event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for example
/// a home directory that cannot be resolved) to the terminal instead of
/// crashing silently. A stale or missing saved location is not fatal; the
/// catalog simply starts unset and the UI prompts for a folder.
fn main() -> anyhow::Result<()> {
    let data_dir = LocationStore::default_data_dir()?;
    let store = LocationStore::new(data_dir);
    let catalog = Catalog::restore(store);

    let mut app = App::new(catalog);
    run_app(&mut app)
}
