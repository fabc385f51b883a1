use posticky_core::db::open_db_in_memory;
use posticky_core::{
    EditorState, HtmlRenderer, MarkdownRenderer, Notebook, NoteStore, SqliteNoteRepository,
};
use uuid::Uuid;

#[test]
fn empty_selection_yields_empty_state_and_ignores_edits() {
    let conn = open_db_in_memory().unwrap();
    let notebook = Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    let editor = notebook.editor();

    assert_eq!(editor.state().unwrap(), EditorState::Empty);
    assert_eq!(editor.set_title("ignored").unwrap(), EditorState::Empty);
    assert_eq!(editor.set_content("ignored").unwrap(), EditorState::Empty);
    assert!(!editor.shows_placeholder().unwrap());
    assert!(notebook.notes().unwrap().is_empty());
}

#[test]
fn edits_write_through_without_explicit_save() {
    let conn = open_db_in_memory().unwrap();
    let mut notebook =
        Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    let created = notebook.add_note().unwrap();

    let editor = notebook.editor();
    editor.set_title("Groceries").unwrap();
    let state = editor.set_content("- milk\n- eggs").unwrap();

    let note = state.note().unwrap();
    assert_eq!(note.id, created.id);
    assert_eq!(note.title, "Groceries");

    let persisted = notebook.note(created.id).unwrap().unwrap();
    assert_eq!(persisted.title, "Groceries");
    assert_eq!(persisted.content, "- milk\n- eggs");
}

#[test]
fn placeholder_shows_only_while_content_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut notebook =
        Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    notebook.add_note().unwrap();

    let editor = notebook.editor();
    assert!(editor.shows_placeholder().unwrap());

    editor.set_content("x").unwrap();
    assert!(!editor.shows_placeholder().unwrap());

    editor.set_content("").unwrap();
    assert!(editor.shows_placeholder().unwrap());
}

#[test]
fn keystroke_edits_apply_in_order_and_last_wins() {
    let conn = open_db_in_memory().unwrap();
    let mut notebook =
        Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    notebook.add_note().unwrap();

    let editor = notebook.editor();
    for title in ["D", "Dr", "Dra", "Draf", "Draft"] {
        editor.set_title(title).unwrap();
    }
    editor.set_title("Draft").unwrap();

    assert_eq!(editor.state().unwrap().note().unwrap().title, "Draft");
    assert_eq!(notebook.notes().unwrap().len(), 1);
}

#[test]
fn dangling_selection_is_treated_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut notebook =
        Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    notebook.add_note().unwrap();
    notebook.select(Uuid::new_v4());

    let editor = notebook.editor();
    assert!(editor.state().unwrap().is_empty());
    assert_eq!(editor.set_title("late keystroke").unwrap(), EditorState::Empty);
    let notes = notebook.notes().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "New Note 1");
}

#[test]
fn preview_renders_current_content() {
    let conn = open_db_in_memory().unwrap();
    let mut notebook =
        Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    let renderer = HtmlRenderer::default();

    assert_eq!(notebook.editor().render_preview(&renderer).unwrap(), None);

    notebook.add_note().unwrap();
    let editor = notebook.editor();
    editor.set_content("# Heading\n\n~~old~~").unwrap();

    let html = editor.render_preview(&renderer).unwrap().unwrap();
    assert!(html.contains("<h1>Heading</h1>"));
    assert!(html.contains("<del>old</del>"));
}

struct WordCount;

impl MarkdownRenderer for WordCount {
    type Output = usize;

    fn render(&self, source: &str) -> usize {
        source.split_whitespace().count()
    }
}

#[test]
fn preview_accepts_custom_renderers() {
    let conn = open_db_in_memory().unwrap();
    let mut notebook =
        Notebook::new(NoteStore::new(SqliteNoteRepository::try_new(&conn).unwrap()));
    notebook
        .add_note_with(Some("Words"), Some("one two three"))
        .unwrap();

    assert_eq!(notebook.editor().render_preview(&WordCount).unwrap(), Some(3));
    notebook.select(Uuid::new_v4());
    assert_eq!(notebook.editor().render_preview(&WordCount).unwrap(), None);
}
