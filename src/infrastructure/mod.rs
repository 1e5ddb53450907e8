// src/infrastructure/mod.rs
pub mod config;
pub mod renderer;
pub mod storage;

pub use config::Config;
pub use storage::{FileKeyValueStore, KeyValueStore, LocalNoteStore, MemoryKeyValueStore};
