// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the note store file (optional)
    #[arg(short, long, value_name = "STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List notes, pinned first
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Show {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note
    Add {
        /// Note text; multiple words are joined with spaces
        #[arg(value_name = "TEXT", num_args = 0..)]
        text: Vec<String>,
    },

    /// Replace the text of a note
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(value_name = "TEXT", num_args = 0..)]
        text: Vec<String>,
    },

    /// Pin or unpin a note
    Pin {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Copy a note's text into a new note
    Duplicate {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// List notes containing a text, ignoring case
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Export all notes to notes.csv
    Export {
        /// Target directory (defaults to config, then the current directory)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Open the notes board in the browser
    View {
        /// Only show notes matching this text
        #[arg(short, long, value_name = "QUERY")]
        query: Option<String>,
    },

    /// Read commands from stdin and apply them one by one
    Session,
}
