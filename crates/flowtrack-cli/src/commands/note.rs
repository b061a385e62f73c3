use std::path::Path;

use flowtrack_core::views::NotesView;
use flowtrack_core::NoteRepository;

use crate::cli::NoteCommand;
use crate::commands::common::{
    ensure_page_access, format_note_lines, note_to_list_item, open_store, resolve_note_text,
    resolve_record_id, NoteListItem,
};
use crate::error::CliError;

pub fn run_note(command: NoteCommand, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    ensure_page_access(&store, "notes")?;
    let repo = NoteRepository::new(&store);

    match command {
        NoteCommand::Add { text } => {
            let text = resolve_note_text(&text)?;
            let note = repo.add(&text)?;
            println!("{}", note.id);
        }
        NoteCommand::List { search, json } => {
            let mut view = NotesView::new(&store);
            if let Some(term) = &search {
                view.set_search(term);
            }
            let visible = view.render();

            if json {
                let items: Vec<NoteListItem> = visible.iter().map(note_to_list_item).collect();
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if visible.is_empty() {
                println!("{}", view.empty_message());
            } else {
                for line in format_note_lines(&visible) {
                    println!("{line}");
                }
            }
        }
        NoteCommand::Delete { id } => {
            // Only task deletion asks for confirmation; notes never do.
            let id = resolve_record_id(&repo.list(), &id, "note")?;
            repo.remove(id)?;
            println!("Deleted {id}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use flowtrack_core::{KvStore, NoteRepository, SessionStore};

    use super::*;

    fn logged_in_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        SessionStore::new(&store)
            .sign_up("Ann", "ann@x.com", "hunter2")
            .unwrap();
        dir
    }

    #[test]
    fn commands_refuse_to_run_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_note(
            NoteCommand::List {
                search: None,
                json: false,
            },
            dir.path(),
        );
        assert!(matches!(result, Err(CliError::AuthRequired)));
    }

    #[test]
    fn add_persists_the_note() {
        let dir = logged_in_dir();
        run_note(
            NoteCommand::Add {
                text: vec!["Meeting".to_string(), "minutes".to_string()],
            },
            dir.path(),
        )
        .unwrap();

        let store = KvStore::open(dir.path()).unwrap();
        let notes = NoteRepository::new(&store).list();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "Meeting minutes");
    }

    #[test]
    fn delete_by_prefix_needs_no_confirmation() {
        let dir = logged_in_dir();
        run_note(
            NoteCommand::Add {
                text: vec!["disposable".to_string()],
            },
            dir.path(),
        )
        .unwrap();

        let store = KvStore::open(dir.path()).unwrap();
        let id = NoteRepository::new(&store).list()[0].id.as_str();

        run_note(
            NoteCommand::Delete {
                id: id[..20].to_string(),
            },
            dir.path(),
        )
        .unwrap();
        assert!(NoteRepository::new(&store).list().is_empty());
    }

    #[test]
    fn unknown_id_surfaces_not_found() {
        let dir = logged_in_dir();
        let result = run_note(
            NoteCommand::Delete {
                id: "ffffffff".to_string(),
            },
            dir.path(),
        );
        assert!(matches!(result, Err(CliError::RecordNotFound("note", _))));
    }
}
