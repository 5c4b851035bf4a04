//! Filesystem access used by the listing engine.
//!
//! The engine never touches `std::fs` directly; it goes through [`FileSystem`],
//! so a listing can run against an in-memory tree in tests.

use crate::types::{EntryKind, EntryMetadata};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Mode given to a broken link whose own permissions could not be read.
const BROKEN_LINK_MODE: u32 = 0o755;

/// Read-only view of a filesystem.
pub trait FileSystem {
    /// Lists the direct children of `path` in enumeration order.
    ///
    /// The outer error means the directory itself could not be read. Inner
    /// errors belong to single children and are skipped by the engine.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<io::Result<PathBuf>>>;

    /// Reads the entry's own metadata without following a final symlink.
    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata>;
}

/// [`FileSystem`] backed by the host OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<io::Result<PathBuf>>> {
        Ok(fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect())
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        let meta = fs::symlink_metadata(path)?;
        let file_type = meta.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::File
        };

        let mut md = EntryMetadata::new(kind);
        md.size = Some(meta.len());
        md.modified = meta.modified().ok();
        fill_ownership(&mut md, &meta);

        if kind == EntryKind::Symlink {
            md.link_target = fs::read_link(path).ok();
            match fs::metadata(path) {
                Ok(target) => md.executable = !target.is_dir() && is_executable(path, &target),
                Err(_) => fill_broken_link_defaults(&mut md),
            }
        } else {
            md.executable = is_executable(path, &meta);
        }
        Ok(md)
    }
}

#[cfg(unix)]
fn fill_ownership(md: &mut EntryMetadata, meta: &Metadata) {
    use std::os::unix::fs::MetadataExt;

    md.mode = Some(meta.mode() & 0o7777);
    md.links = Some(meta.nlink());
    md.owner = users::get_user_by_uid(meta.uid()).map(|u| u.name().to_string_lossy().into_owned());
    md.group =
        users::get_group_by_gid(meta.gid()).map(|g| g.name().to_string_lossy().into_owned());
}

#[cfg(not(unix))]
fn fill_ownership(_md: &mut EntryMetadata, _meta: &Metadata) {}

#[cfg(unix)]
fn is_executable(_path: &Path, meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(path: &Path, meta: &Metadata) -> bool {
    if !meta.is_file() {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            matches!(
                ext.to_ascii_lowercase().as_str(),
                "exe" | "com" | "bat" | "cmd" | "ps1"
            )
        })
        .unwrap_or(false)
}

/// Fills whatever a broken link is missing with the current user's defaults.
fn fill_broken_link_defaults(md: &mut EntryMetadata) {
    md.mode.get_or_insert(BROKEN_LINK_MODE);
    md.links.get_or_insert(1);
    if md.owner.is_none() {
        md.owner = current_user();
    }
    if md.group.is_none() {
        md.group = current_group();
    }
}

#[cfg(unix)]
fn current_user() -> Option<String> {
    users::get_current_username().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(unix)]
fn current_group() -> Option<String> {
    users::get_current_groupname().map(|name| name.to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn current_user() -> Option<String> {
    None
}

#[cfg(not(unix))]
fn current_group() -> Option<String> {
    None
}
