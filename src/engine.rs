use crate::error::SlsError;
use crate::format::format_entry;
use crate::fs::{FileSystem, OsFileSystem};
use crate::layout::{pack_grid, terminal_width};
use crate::options::DisplayConfiguration;
use crate::sort::sort_entries;
use crate::types::{Entry, EntryKind};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
pub struct Lister<F = OsFileSystem> {
    fs: F,
    width: Option<usize>,
}
impl Lister<OsFileSystem> {
    pub fn new() -> Self {
        Self::with_fs(OsFileSystem)
    }
}
impl Default for Lister<OsFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}
impl<F: FileSystem> Lister<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs, width: None }
    }
    /// Packs grids to a fixed width instead of asking the terminal.
    pub fn terminal_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
    pub fn entry(&self, path: &Path) -> Result<Entry, SlsError> {
        let metadata = self
            .fs
            .metadata(path)
            .map_err(|e| SlsError::metadata(path, e))?;
        Ok(Entry::new(path, metadata))
    }
    pub fn list(&self, config: &DisplayConfiguration) -> Result<String, SlsError> {
        let location = config.resolved_location();
        #[cfg(feature = "logging")]
        tracing::debug!("Listing {}", location.display());
        if config.directory_only {
            let entry = self.entry(location).map_err(|e| match e {
                SlsError::MetadataUnavailable { path, source } => SlsError::unreadable(path, source),
                other => other,
            })?;
            return Ok(format_entry(&entry, config));
        }
        let mut entries = self.children(location, config.show_hidden)?;
        sort_entries(&mut entries, config.sort_key);
        let cells: Vec<String> = entries.iter().map(|e| format_entry(e, config)).collect();
        let mut result = if config.line_per_entry() {
            cells.concat()
        } else {
            pack_grid(&cells, self.width.unwrap_or_else(terminal_width))
        };
        if config.recurse {
            if !config.line_per_entry() && !result.is_empty() {
                result.push('\n');
            }
            for entry in entries.iter().filter(|e| e.metadata.kind == EntryKind::Directory) {
                result.push_str(&format!("\n{}:\n", entry.path.display()));
                result.push_str(&self.list(&config.with_location(&entry.path))?);
            }
        }
        Ok(result)
    }
    pub fn list_targets(
        &self,
        config: &DisplayConfiguration,
        targets: &[PathBuf],
    ) -> Vec<Result<String, SlsError>> {
        if targets.is_empty() {
            return vec![self.list(config)];
        }
        let framed = targets.len() > 1;
        let mut emitted = false;
        let mut sections = Vec::with_capacity(targets.len());
        for target in targets {
            let listing = match self.list(&config.with_location(target)) {
                Ok(listing) => listing,
                Err(e) => {
                    sections.push(Err(e));
                    continue;
                }
            };
            let mut section = String::with_capacity(listing.len() + 64);
            if emitted {
                section.push('\n');
            }
            if framed {
                section.push_str(&format!("{}:\n", target.display()));
            }
            section.push_str(&listing);
            sections.push(Ok(section));
            emitted = true;
        }
        sections
    }
    fn children(&self, dir: &Path, show_hidden: bool) -> Result<Vec<Entry>, SlsError> {
        let paths = self
            .fs
            .read_dir(dir)
            .map_err(|e| SlsError::unreadable(dir, e))?;
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let path = match path {
                Ok(p) => p,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), _e);
                    continue;
                }
            };
            if !show_hidden && is_hidden(&path) {
                continue;
            }
            match self.entry(&path) {
                Ok(entry) => entries.push(entry),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping entry: {}", _e);
                }
            }
        }
        Ok(entries)
    }
}
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
pub fn list(config: &DisplayConfiguration) -> Result<String, SlsError> {
    Lister::new().list(config)
}
pub fn list_targets(
    config: &DisplayConfiguration,
    targets: &[PathBuf],
) -> Vec<Result<String, SlsError>> {
    Lister::new().list_targets(config, targets)
}
