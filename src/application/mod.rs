// src/application/mod.rs
pub mod controller;
pub mod exporter;
pub mod id_generator;
pub mod note_repository;

pub use controller::{Intent, Key, NoteController, Outcome};
pub use exporter::Exporter;
pub use id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use note_repository::{NoteRepository, NoteStore};
