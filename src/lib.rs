// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use application::{Intent, NoteController, NoteRepository, Outcome, RandomIdGenerator};
use domain::DomainError;
use infrastructure::renderer::BrowserRenderer;
use infrastructure::{Config, FileKeyValueStore, LocalNoteStore};
use ports::{Control, HtmlPresenter, TextPresenter, WidgetBoard};
use tracing::{debug, info};

use crate::cli::args::{Args, Command};
use crate::constants::{APP_DIR_NAME, STORE_FILE_NAME};

type AppController =
    NoteController<LocalNoteStore<FileKeyValueStore>, RandomIdGenerator, WidgetBoard>;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting stickynotes with arguments");

    let config = load_config(args.config.as_deref())?;
    let store_path = match args.store {
        Some(path) => {
            debug!(?path, "Using provided store path");
            path
        }
        None => find_store_path(&config)?,
    };
    let export_dir = config
        .export_directory()
        .unwrap_or_else(|| PathBuf::from("."));

    // Initialize infrastructure
    let store = LocalNoteStore::with_key(FileKeyValueStore::new(&store_path), &config.storage.key);

    // Initialize application
    let repository = NoteRepository::new(store, RandomIdGenerator::from_entropy());
    let mut controller = NoteController::new(
        repository,
        WidgetBoard::new(),
        application::Exporter::new(export_dir),
    );
    controller.dispatch(Intent::Load)?;
    info!(?store_path, notes = controller.view().len(), "Loaded notes");

    execute(&mut controller, args.command)
}

fn execute(controller: &mut AppController, command: Command) -> Result<()> {
    let presenter = TextPresenter::new();

    match command {
        Command::List { json } => {
            if json {
                let notes = controller.repository().list()?;
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                println!("{}", presenter.render(controller.view()));
            }
        }
        Command::Show { note_id, json } => {
            let note = controller
                .repository()
                .find_by_id(note_id)?
                .ok_or(DomainError::NoteNotFound(note_id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&note)?);
            } else {
                let pin = if note.fixed { " (pinned)" } else { "" };
                println!("Note {}{}\n{}", note.id, pin, note.content);
            }
        }
        Command::Add { text } => {
            controller.dispatch(Intent::DraftChanged(text.join(" ")))?;
            if let Outcome::Added(note) = controller.dispatch(Intent::AddClicked)? {
                println!("Added note {}", note.id);
            }
        }
        Command::Edit { note_id, text } => {
            let handle = controller.view().widget_for(note_id).map(|w| w.handle);
            let intent = handle.and_then(|h| controller.view_mut().type_into(h, &text.join(" ")));
            dispatch_if_visible(controller, note_id, intent)?;
        }
        Command::Pin { note_id } => {
            let intent = click(controller.view(), note_id, Control::Pin);
            dispatch_if_visible(controller, note_id, intent)?;
            println!("{}", presenter.render(controller.view()));
        }
        Command::Delete { note_id } => {
            let intent = click(controller.view(), note_id, Control::Delete);
            dispatch_if_visible(controller, note_id, intent)?;
        }
        Command::Duplicate { note_id } => {
            let intent = click(controller.view(), note_id, Control::Duplicate);
            if let Some(Outcome::Added(note)) = dispatch_if_visible(controller, note_id, intent)? {
                println!("Added note {}", note.id);
            }
        }
        Command::Search { query } => {
            let intent = controller.view_mut().type_search(&query);
            controller.dispatch(intent)?;
            println!("{}", presenter.render(controller.view()));
        }
        Command::Export { dir } => {
            let path = match dir {
                Some(dir) => {
                    let notes = controller.repository().list()?;
                    application::Exporter::new(dir).export(&notes)?
                }
                None => match controller.dispatch(Intent::ExportClicked)? {
                    Outcome::Exported(path) => path,
                    other => anyhow::bail!("Unexpected export outcome: {:?}", other),
                },
            };
            println!("Exported to {}", path.display());
        }
        Command::View { query } => {
            if let Some(query) = query {
                let intent = controller.view_mut().type_search(&query);
                controller.dispatch(intent)?;
            }
            let html = HtmlPresenter::new().render(controller.view());
            let mut renderer = BrowserRenderer::new();
            let path = renderer.write_page(&html)?;
            renderer.open_in_browser(&path)?;
        }
        Command::Session => {
            let stdin = io::stdin();
            cli::session::run_session(controller, stdin.lock(), io::stdout())?;
        }
    }

    Ok(())
}

fn click(board: &WidgetBoard, note_id: i64, control: Control) -> Option<Intent> {
    board
        .widget_for(note_id)
        .and_then(|w| board.click(w.handle, control))
}

/// Unknown ids are silent no-ops, like a click on a widget that is gone
fn dispatch_if_visible(
    controller: &mut AppController,
    note_id: i64,
    intent: Option<Intent>,
) -> Result<Option<Outcome>> {
    match intent {
        Some(intent) => Ok(Some(controller.dispatch(intent)?)),
        None => {
            debug!(note_id, "No widget for note, nothing to do");
            Ok(None)
        }
    }
}

/// Explicit config file, else the platform config file when present, else defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        debug!(?path, "Loading config");
        return Config::load(path);
    }

    match dirs::config_dir() {
        Some(dir) => Config::load_or_default(dir.join(APP_DIR_NAME).join("config.toml")),
        None => Ok(Config::default()),
    }
}

/// Store path from config, falling back to the platform data directory
pub fn find_store_path(config: &Config) -> Result<PathBuf> {
    if let Some(path) = config.store_path() {
        debug!(?path, "Using store path from config");
        return Ok(path);
    }

    let data_dir = dirs::data_dir().context("Could not find data directory")?;
    Ok(data_dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
}
