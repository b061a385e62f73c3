//! Command-line argument definitions for the `flowtrack` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flowtrack_core::views::TaskFilter;

#[derive(Parser)]
#[command(
    name = "flowtrack",
    version,
    about = "FlowTrack - track tasks, capture notes, and watch your focus stats"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task text for quick capture: `flowtrack Buy milk` adds a task
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Directory for FlowTrack data (overrides FLOWTRACK_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the local account
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommand),

    /// Manage notes
    #[command(subcommand)]
    Note(NoteCommand),

    /// Show or update the profile card
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Show productivity stats
    Stats {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Keep running and reprint when the stats refresh
        #[arg(long)]
        watch: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create the local account and log in
    Signup {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Log in with email and password
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show who is logged in
    Status,
}

#[derive(Subcommand)]
pub enum TaskCommand {
    /// Add a task (reads piped stdin when no text is given)
    Add {
        /// Task text
        text: Vec<String>,
    },

    /// List tasks
    List {
        /// Show all, active, or completed tasks
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Only show tasks whose text contains this term
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Toggle a task between active and completed
    Toggle {
        /// Task ID or unique prefix
        id: String,
    },

    /// Replace a task's text
    Edit {
        /// Task ID or unique prefix
        id: String,

        /// Replacement text
        text: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID or unique prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteCommand {
    /// Add a note (arguments, then piped stdin, then $EDITOR)
    Add {
        /// Note text
        text: Vec<String>,
    },

    /// List notes, newest first
    List {
        /// Only show notes whose text contains this term
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID or unique prefix
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the profile card
    Show,

    /// Update display name and email
    Update {
        /// New display name
        #[arg(long)]
        name: String,

        /// New email address
        #[arg(long)]
        email: String,
    },
}

/// Clap-facing mirror of [`TaskFilter`] so `--filter` gets enum-style help.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TaskFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Active => Self::Active,
            FilterArg::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
