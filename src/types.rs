use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Reset escape emitted after a colored entry.
pub const RESET: &str = "\u{1b}[0;0m";

/// The kind of filesystem object an entry is, as seen without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    /// Regular files and anything else that is neither a directory nor a link.
    File,
}

/// Metadata of a single entry, read once when the entry is loaded.
///
/// Every optional field that the platform cannot provide stays `None` and is
/// left out of long-form output.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    /// Permission bits (`st_mode & 0o7777`).
    pub mode: Option<u32>,
    pub owner: Option<String>,
    pub group: Option<String>,
    /// Hard-link count.
    pub links: Option<u64>,
    /// Size in bytes of the entry itself (for links, the link, not the target).
    pub size: Option<u64>,
    pub modified: Option<SystemTime>,
    /// For links this describes the target; see [`crate::OsFileSystem`].
    pub executable: bool,
    /// Where a symbolic link points, when it could be read.
    pub link_target: Option<PathBuf>,
}

impl EntryMetadata {
    /// Metadata with only a kind set, everything else unknown.
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            mode: None,
            owner: None,
            group: None,
            links: None,
            size: None,
            modified: None,
            executable: false,
            link_target: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}

/// A directory child ready to be sorted and rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The path used to reach the entry.
    pub path: PathBuf,
    /// Base name shown in listings.
    pub name: String,
    pub metadata: EntryMetadata,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, metadata: EntryMetadata) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            metadata,
        }
    }
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Glyph shown in front of an entry when icons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Folder,
    Link,
    Gear,
    Document,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Folder => "📁",
            Icon::Link => "🔗",
            Icon::Gear => "⚙️",
            Icon::Document => "📄",
        }
    }
}

/// Terminal color token of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Yellow,
    Red,
    White,
}

impl Color {
    /// The ANSI escape that switches the terminal to this color.
    pub fn escape(&self) -> &'static str {
        match self {
            Color::Blue => "\u{1b}[0;34m",
            Color::Yellow => "\u{1b}[0;33m",
            Color::Red => "\u{1b}[0;31m",
            Color::White => "\u{1b}[0;37m",
        }
    }
}

/// How an entry is presented: icon, color and optional link destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRepresentation {
    pub icon: Icon,
    pub color: Color,
    pub symlink_target: Option<PathBuf>,
}
