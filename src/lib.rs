//! # sls
//!
//! `sls` is a library for listing directory contents the way `ls` does: it classifies each
//! entry, renders it with optional icons, colors and long-form attributes, sorts the entries,
//! wraps them to the terminal width, and can recurse into subdirectories.
//!
//! A listing call returns the complete rendered text. Nothing is printed by the library;
//! fatal problems come back as [`SlsError`], per-entry problems are skipped and reported through
//! `tracing` when the `logging` feature is enabled.
//!
//! All filesystem access goes through the [`FileSystem`] trait. [`list`] uses the host
//! filesystem; [`Lister::with_fs`] accepts any other implementation.
//!
//! # Features
//!
//! - `logging` (default): Emits debug and warning events via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use sls::{DisplayBuilder, SortKey, list};
//!
//! let config = DisplayBuilder::new()
//!     .location(".")
//!     .show_hidden(true)
//!     .icons(true)
//!     .sort_key(SortKey::Size)
//!     .build();
//!
//! let listing = list(&config).expect("Failed to list directory");
//! println!("{}", listing);
//! ```

mod classify;
mod engine;
mod error;
mod format;
mod fs;
mod layout;
mod options;
mod sort;
mod types;

pub use classify::classify;
pub use engine::{Lister, list, list_targets};
pub use error::SlsError;
pub use format::{format_entry, format_file_size, format_file_time, format_permissions};
pub use fs::{FileSystem, OsFileSystem};
pub use layout::{DEFAULT_TERMINAL_WIDTH, pack_grid, strip_escapes, terminal_width, visible_width};
pub use options::{DisplayBuilder, DisplayConfiguration, SortKey};
pub use sort::sort_entries;
pub use types::{Color, Entry, EntryKind, EntryMetadata, EntryRepresentation, Icon, RESET};
