// src/cli/session.rs
use crate::application::{IdGenerator, Intent, Key, NoteController, NoteStore, Outcome};
use crate::ports::{Control, TextPresenter, WidgetBoard, WidgetHandle};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Type into the add-note input without submitting
    Type(String),
    /// Press Enter in the add-note input
    Enter,
    /// Type into the add-note input, then click add
    Add(String),
    Edit { note_id: i64, text: String },
    Pin(i64),
    Delete(i64),
    Duplicate(i64),
    Search(String),
    Export,
    List,
    Help,
    Quit,
}

pub const SESSION_HELP: &str = "\
Commands:
  add <text>          add a note
  type <text>         fill the add input without submitting
  enter               submit the add input
  edit <id> <text>    replace a note's text
  pin <id>            pin or unpin a note
  delete <id>         delete a note
  dup <id>            duplicate a note
  search [text]       filter notes; empty clears the filter
  export              write notes.csv
  list                show the board
  help                show this help
  quit                leave the session";

/// Parse a session line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "add" => SessionCommand::Add(rest.to_string()),
        "type" => SessionCommand::Type(rest.to_string()),
        "enter" => SessionCommand::Enter,
        "edit" => {
            let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            SessionCommand::Edit {
                note_id: parse_id(id)?,
                text: text.trim().to_string(),
            }
        }
        "pin" => SessionCommand::Pin(parse_id(rest)?),
        "delete" | "rm" => SessionCommand::Delete(parse_id(rest)?),
        "dup" | "duplicate" => SessionCommand::Duplicate(parse_id(rest)?),
        "search" => SessionCommand::Search(rest.to_string()),
        "export" => SessionCommand::Export,
        "list" | "ls" => SessionCommand::List,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(Some(command))
}

fn handle_for(board: &WidgetBoard, note_id: i64) -> Option<WidgetHandle> {
    board.widget_for(note_id).map(|w| w.handle)
}

fn parse_id(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid note id: '{}'", value.trim()))
}

/// Translate a command into intents fired against the current board.
///
/// Commands naming a note without a visible widget fire nothing.
pub fn intents_for(command: &SessionCommand, board: &mut WidgetBoard) -> Vec<Intent> {
    match command {
        SessionCommand::Type(text) => vec![Intent::DraftChanged(text.clone())],
        SessionCommand::Enter => vec![Intent::DraftKeyDown {
            key: Key::Enter,
            shift: false,
        }],
        SessionCommand::Add(text) => vec![Intent::DraftChanged(text.clone()), Intent::AddClicked],
        SessionCommand::Edit { note_id, text } => handle_for(board, *note_id)
            .and_then(|h| board.type_into(h, text))
            .into_iter()
            .collect(),
        SessionCommand::Pin(id) => handle_for(board, *id)
            .and_then(|h| board.click(h, Control::Pin))
            .into_iter()
            .collect(),
        SessionCommand::Delete(id) => handle_for(board, *id)
            .and_then(|h| board.click(h, Control::Delete))
            .into_iter()
            .collect(),
        SessionCommand::Duplicate(id) => handle_for(board, *id)
            .and_then(|h| board.click(h, Control::Duplicate))
            .into_iter()
            .collect(),
        SessionCommand::Search(query) => vec![board.type_search(query)],
        SessionCommand::Export => vec![Intent::ExportClicked],
        SessionCommand::List | SessionCommand::Help | SessionCommand::Quit => vec![],
    }
}

/// Drive a controller from line-oriented input until EOF or `quit`
pub fn run_session<S, G, R, W>(
    controller: &mut NoteController<S, G, WidgetBoard>,
    input: R,
    mut output: W,
) -> Result<()>
where
    S: NoteStore,
    G: IdGenerator,
    R: BufRead,
    W: Write,
{
    let presenter = TextPresenter::new();
    writeln!(output, "{}", presenter.render(controller.view()))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                writeln!(output, "{SESSION_HELP}")?;
                continue;
            }
            _ => {}
        }

        for intent in intents_for(&command, controller.view_mut()) {
            match controller.dispatch(intent)? {
                Outcome::Exported(path) => writeln!(output, "Exported to {}", path.display())?,
                Outcome::Added(note) => writeln!(output, "Added note {}", note.id)?,
                _ => {}
            }
        }

        if !matches!(command, SessionCommand::Export | SessionCommand::Type(_)) {
            writeln!(output, "{}", presenter.render(controller.view()))?;
        }
    }

    Ok(())
}
