//! Core library surface for the songlist TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. Keeping the glue logic documented makes it easy to recall why each
//! re-export exists when revisiting the project.
pub mod catalog;
pub mod launch;
pub mod models;
pub mod store;
pub mod ui;

/// The catalog of project folders plus the states the shell renders from it.
pub use catalog::{Catalog, CatalogState};

/// The primary domain type that other layers manipulate.
pub use models::ProjectEntry;

/// Persistence for the saved root location, typically used by `main.rs` to
/// restore the last session's folder.
pub use store::LocationStore;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
