// src/constants.rs
//
// Application-wide constants shared by storage, id generation and export.

/// Key under which the whole note collection is stored as one blob.
///
/// Used in: `infrastructure/storage.rs`, `infrastructure/config.rs`
pub const STORAGE_KEY: &str = "notes";

/// Exclusive upper bound for randomly drawn note ids.
///
/// Ids are drawn from `[0, ID_RANGE_END)`. Once every value in the range is
/// taken the generator falls back to `max + 1`.
///
/// Used in: `application/id_generator.rs`
pub const ID_RANGE_END: i64 = 5000;

/// File name of the CSV export.
///
/// Used in: `application/exporter.rs`
pub const EXPORT_FILE_NAME: &str = "notes.csv";

/// Header row of the CSV export.
///
/// Used in: `application/exporter.rs`
pub const EXPORT_HEADER: [&str; 3] = ["ID", "Content", "Pinned?"];

/// File name of the JSON store inside the data directory.
///
/// Used in: `lib.rs`
pub const STORE_FILE_NAME: &str = "store.json";

/// Directory name used below the platform data and config directories.
///
/// Used in: `lib.rs`
pub const APP_DIR_NAME: &str = "stickynotes";

/// Delay in milliseconds after writing the HTML board before returning.
///
/// The browser needs a brief moment to pick up the file before the temporary
/// directory holding it is dropped.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
