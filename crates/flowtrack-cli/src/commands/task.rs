use std::path::Path;

use flowtrack_core::views::TasksView;
use flowtrack_core::TaskRepository;

use crate::cli::TaskCommand;
use crate::commands::common::{
    confirm, ensure_page_access, format_task_lines, open_store, resolve_record_id,
    resolve_task_text, task_to_list_item, TaskListItem,
};
use crate::error::CliError;

pub fn run_task(command: TaskCommand, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    ensure_page_access(&store, "tasks")?;
    let repo = TaskRepository::new(&store);

    match command {
        TaskCommand::Add { text } => {
            let text = resolve_task_text(&text)?;
            let task = repo.add(&text)?;
            println!("{}", task.id);
        }
        TaskCommand::List {
            filter,
            search,
            json,
        } => {
            let mut view = TasksView::new(&store);
            view.set_filter(filter.into());
            if let Some(term) = &search {
                view.set_search(term);
            }
            let visible = view.render();

            if json {
                let items: Vec<TaskListItem> = visible.iter().map(task_to_list_item).collect();
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if visible.is_empty() {
                println!("{}", view.empty_message());
            } else {
                for line in format_task_lines(&visible) {
                    println!("{line}");
                }
            }
        }
        TaskCommand::Toggle { id } => {
            let id = resolve_record_id(&repo.list(), &id, "task")?;
            let task = repo.toggle(id)?;
            let state = if task.completed { "completed" } else { "active" };
            println!("{} is now {state}", task.id);
        }
        TaskCommand::Edit { id, text } => {
            let id = resolve_record_id(&repo.list(), &id, "task")?;
            let text = resolve_task_text(&text)?;
            let task = repo.edit(id, &text)?;
            println!("{}", task.id);
        }
        TaskCommand::Delete { id, yes } => {
            let id = resolve_record_id(&repo.list(), &id, "task")?;
            if !yes && !confirm("Delete this task?")? {
                println!("Aborted");
                return Ok(());
            }
            repo.remove(id)?;
            println!("Deleted {id}");
        }
    }
    Ok(())
}

/// Bare `flowtrack <text>` adds a task without the subcommand ceremony.
pub fn run_quick_capture(text_parts: &[String], data_dir: &Path) -> Result<(), CliError> {
    run_task(
        TaskCommand::Add {
            text: text_parts.to_vec(),
        },
        data_dir,
    )
}

#[cfg(test)]
mod tests {
    use flowtrack_core::{Error, KvStore, SessionStore, TaskRepository};

    use super::*;
    use crate::cli::FilterArg;

    fn logged_in_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        SessionStore::new(&store)
            .sign_up("Ann", "ann@x.com", "hunter2")
            .unwrap();
        dir
    }

    fn add(dir: &Path, text: &str) {
        run_task(
            TaskCommand::Add {
                text: vec![text.to_string()],
            },
            dir,
        )
        .unwrap();
    }

    #[test]
    fn commands_refuse_to_run_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_task(
            TaskCommand::List {
                filter: FilterArg::All,
                search: None,
                json: false,
            },
            dir.path(),
        );
        assert!(matches!(result, Err(CliError::AuthRequired)));
    }

    #[test]
    fn add_and_toggle_round_trip_through_storage() {
        let dir = logged_in_dir();
        add(dir.path(), "Water plants");

        let store = KvStore::open(dir.path()).unwrap();
        let tasks = TaskRepository::new(&store).list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Water plants");

        run_task(
            TaskCommand::Toggle {
                id: tasks[0].id.as_str(),
            },
            dir.path(),
        )
        .unwrap();
        assert!(TaskRepository::new(&store).list()[0].completed);
    }

    #[test]
    fn quick_capture_is_gated_like_any_page() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_quick_capture(&["Buy milk".to_string()], dir.path());
        assert!(matches!(result, Err(CliError::AuthRequired)));

        let dir = logged_in_dir();
        run_quick_capture(&["Buy milk".to_string()], dir.path()).unwrap();

        let store = KvStore::open(dir.path()).unwrap();
        assert_eq!(TaskRepository::new(&store).list()[0].text, "Buy milk");
    }

    #[test]
    fn edit_by_unique_prefix_replaces_text() {
        let dir = logged_in_dir();
        add(dir.path(), "Old text");

        let store = KvStore::open(dir.path()).unwrap();
        let id = TaskRepository::new(&store).list()[0].id.as_str();

        run_task(
            TaskCommand::Edit {
                id: id[..20].to_string(),
                text: vec!["New".to_string(), "text".to_string()],
            },
            dir.path(),
        )
        .unwrap();

        assert_eq!(TaskRepository::new(&store).list()[0].text, "New text");
    }

    #[test]
    fn delete_with_yes_skips_the_prompt() {
        let dir = logged_in_dir();
        add(dir.path(), "Done with this");

        let store = KvStore::open(dir.path()).unwrap();
        let id = TaskRepository::new(&store).list()[0].id;

        run_task(
            TaskCommand::Delete {
                id: id.as_str(),
                yes: true,
            },
            dir.path(),
        )
        .unwrap();
        assert!(TaskRepository::new(&store).list().is_empty());
    }

    #[test]
    fn unknown_id_surfaces_not_found() {
        let dir = logged_in_dir();
        add(dir.path(), "only one");

        let result = run_task(
            TaskCommand::Toggle {
                id: "ffffffff".to_string(),
            },
            dir.path(),
        );
        assert!(matches!(result, Err(CliError::RecordNotFound("task", _))));
    }

    #[test]
    fn blank_edit_text_never_reaches_storage() {
        let dir = logged_in_dir();
        add(dir.path(), "keep");

        let store = KvStore::open(dir.path()).unwrap();
        let id = TaskRepository::new(&store).list()[0].id.as_str();

        let result = run_task(
            TaskCommand::Edit {
                id,
                text: vec!["  ".to_string()],
            },
            dir.path(),
        );
        assert!(result.is_err());
        assert_eq!(TaskRepository::new(&store).list()[0].text, "keep");
    }

    #[test]
    fn core_validation_errors_pass_through_unchanged() {
        let error = CliError::from(Error::EmptyText);
        assert_eq!(error.to_string(), "Text cannot be empty");
    }
}
