//! Core logic for Posticky, a single-window markdown notes app.
//! Owns the persistent note collection, the selection cursor, the editor
//! view over the selected note, and the editor/preview split ratio.

pub mod config;
pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod preview;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use layout::split::{
    SplitRatio, SplitRatioController, DEFAULT_SPLIT_RATIO, MAX_SPLIT_RATIO, MIN_PANE_WIDTH,
    MIN_SPLIT_RATIO,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    default_title, Note, NoteId, CONTENT_PLACEHOLDER, EMPTY_DETAIL_HINT, TITLE_PLACEHOLDER,
};
pub use preview::{HtmlRenderer, MarkdownRenderer};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::editor_session::{EditorSession, EditorState};
pub use service::note_store::{system_clock_ms, Clock, NoteStore, StoreError, StoreResult};
pub use service::notebook::Notebook;
pub use service::selection::SelectionController;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
