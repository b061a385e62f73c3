//! Helpers shared across command modules: store access, gating, ID
//! resolution, text capture, and list rendering.

use std::env;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use flowtrack_core::gate::{is_protected_page, AccessGate, PageRouter};
use flowtrack_core::util::normalize_required;
use flowtrack_core::{KvStore, Note, Record, RecordId, SessionStore, Task};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct TaskListItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
    pub relative_time: String,
}

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub preview: String,
    pub text: String,
    pub created_at: i64,
    pub relative_time: String,
}

pub fn open_store(data_dir: &Path) -> Result<KvStore, CliError> {
    Ok(KvStore::open(data_dir)?)
}

/// Terminal stand-in for the app's page navigation: "navigating" tells
/// the user where the app would have sent them.
struct TerminalRouter;

impl PageRouter for TerminalRouter {
    fn navigate(&mut self, page: &str) {
        eprintln!("Redirecting to {page}.");
    }
}

/// Run the access gate before a command touches its page's data.
///
/// Public pages always pass. Protected pages need a logged-in profile;
/// denial announces the redirect and the command performs no work.
pub fn ensure_page_access(store: &KvStore, page: &str) -> Result<(), CliError> {
    if !is_protected_page(page) {
        return Ok(());
    }

    let gate = AccessGate::new(SessionStore::new(store));
    if gate.require_auth(&mut TerminalRouter) {
        Ok(())
    } else {
        Err(CliError::AuthRequired)
    }
}

/// Resolve an ID argument against a listed collection.
///
/// Accepts a full record ID or any unique prefix of one. Ambiguous
/// prefixes are rejected with up to three candidates to disambiguate.
pub fn resolve_record_id<T: Record>(
    records: &[T],
    query: &str,
    kind: &'static str,
) -> Result<RecordId, CliError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CliError::EmptyRecordId);
    }

    if let Ok(id) = query.parse::<RecordId>() {
        if records.iter().any(|record| record.id() == id) {
            return Ok(id);
        }
    }

    let matching: Vec<RecordId> = records
        .iter()
        .map(Record::id)
        .filter(|id| id.as_str().starts_with(query))
        .collect();

    match matching.len() {
        0 => Err(CliError::RecordNotFound(kind, query.to_string())),
        1 => Ok(matching[0]),
        _ => {
            let options = matching
                .iter()
                .take(3)
                .map(short_id)
                .collect::<Vec<_>>()
                .join(", ");
            Err(CliError::AmbiguousRecordId(format!(
                "ID prefix '{query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

#[must_use]
pub fn short_id(id: &RecordId) -> String {
    id.as_str().chars().take(13).collect()
}

pub fn format_task_lines(tasks: &[Task]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    tasks
        .iter()
        .map(|task| {
            let id = short_id(&task.id);
            let marker = if task.completed { "[x]" } else { "[ ]" };
            let preview = text_preview(&task.text, 40);
            let relative_time = format_relative_time(task.created_at, now_ms);
            format!("{id:<13}  {marker} {preview:<40}  {relative_time}")
        })
        .collect()
}

pub fn task_to_list_item(task: &Task) -> TaskListItem {
    let now_ms = Utc::now().timestamp_millis();
    TaskListItem {
        id: task.id.as_str(),
        text: task.text.clone(),
        completed: task.completed,
        created_at: task.created_at,
        relative_time: format_relative_time(task.created_at, now_ms),
    }
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notes
        .iter()
        .map(|note| {
            let id = short_id(&note.id);
            let preview = text_preview(&note.text, 40);
            let relative_time = format_relative_time(note.created_at, now_ms);
            format!("{id:<13}  {preview:<40}  {relative_time}")
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    let now_ms = Utc::now().timestamp_millis();
    NoteListItem {
        id: note.id.as_str(),
        preview: text_preview(&note.text, 80),
        text: note.text.clone(),
        created_at: note.created_at,
        relative_time: format_relative_time(note.created_at, now_ms),
    }
}

/// First line of `text`, whitespace collapsed, truncated to `max_chars`.
#[must_use]
pub fn text_preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut truncated: String = collapsed
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    truncated.push_str("...");
    truncated
}

#[must_use]
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

/// Task text from arguments, falling back to piped stdin.
pub fn resolve_task_text(text_parts: &[String]) -> Result<String, CliError> {
    if let Some(text) = normalize_required(&text_parts.join(" ")) {
        return Ok(text);
    }
    if let Some(text) = read_piped_stdin()? {
        return Ok(text);
    }
    Err(CliError::EmptyTaskText)
}

/// Note text from arguments, then piped stdin, then an editor session.
///
/// Notes are the one multi-line surface, so they get the editor the way
/// the app gives them a textarea.
pub fn resolve_note_text(text_parts: &[String]) -> Result<String, CliError> {
    if let Some(text) = normalize_required(&text_parts.join(" ")) {
        return Ok(text);
    }
    if let Some(text) = read_piped_stdin()? {
        return Ok(text);
    }
    if let Some(text) = capture_editor_input()? {
        return Ok(text);
    }
    Err(CliError::EmptyNoteText)
}

fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_required(&buffer))
}

fn capture_editor_input() -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let scratch = scratch_note_path();
    std::fs::write(&scratch, "")?;

    let launch_result = launch_editor(&editor, &scratch);
    let text = std::fs::read_to_string(&scratch)?;
    let _ = std::fs::remove_file(&scratch);

    launch_result?;
    Ok(normalize_required(&text))
}

fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(CliError::EditorFailed(format!(
            "`{editor}` exited with status {status}"
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // EDITOR may carry arguments, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let status = Command::new(program).args(parts).arg(file_path).status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

fn scratch_note_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("flowtrack-note-{}-{now}.txt", std::process::id()))
}

pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

pub fn resolve_data_dir(cli_data_dir: Option<PathBuf>) -> PathBuf {
    cli_data_dir
        .or_else(|| env::var_os("FLOWTRACK_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

pub fn default_data_dir() -> PathBuf {
    data_dir_root(dirs::data_dir()).join("flowtrack")
}

fn data_dir_root(platform_dir: Option<PathBuf>) -> PathBuf {
    platform_dir.unwrap_or_else(|| {
        tracing::warn!("No platform data directory; falling back to the working directory");
        PathBuf::from(".")
    })
}
