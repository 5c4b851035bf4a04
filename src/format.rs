//! Rendering of a single entry into its listing text.

use crate::classify::classify;
use crate::options::DisplayConfiguration;
use crate::types::{Entry, EntryKind, EntryMetadata, RESET};
use chrono::{DateTime, Local};
use humansize::{BINARY, format_size};
use std::time::SystemTime;

/// Renders one entry, including its trailing newline or two-space separator.
///
/// Fields appear in a fixed order: icon, long-form attributes, color escape,
/// name, classify indicator, link destination, color reset, terminator.
/// Long-form attributes the platform could not provide are left out.
pub fn format_entry(entry: &Entry, config: &DisplayConfiguration) -> String {
    let repr = classify(&entry.metadata);
    let mut out = String::with_capacity(entry.name.len() + 16);

    if config.icons {
        out.push_str(repr.icon.glyph());
        out.push(' ');
    }

    if config.long_form {
        push_long_fields(&mut out, &entry.metadata, config.human_readable_sizes);
    }

    if config.color {
        out.push_str(repr.color.escape());
    }

    out.push_str(&entry.name);

    if config.classify_indicator {
        if entry.metadata.is_dir() {
            out.push('/');
        } else if entry.metadata.executable {
            out.push('*');
        }
    }

    if let Some(target) = &repr.symlink_target {
        out.push_str(" -> ");
        out.push_str(&target.display().to_string());
    }

    if config.color {
        out.push_str(RESET);
    }

    if config.line_per_entry() {
        out.push('\n');
    } else {
        out.push_str("  ");
    }
    out
}

fn push_long_fields(out: &mut String, md: &EntryMetadata, human_readable: bool) {
    let mut field = |value: String| {
        out.push_str(&value);
        out.push(' ');
    };

    if let Some(mode) = md.mode {
        field(format_permissions(md.kind, mode));
    }
    if let Some(owner) = &md.owner {
        field(owner.clone());
    }
    if let Some(group) = &md.group {
        field(group.clone());
    }
    if let Some(links) = md.links {
        field(format!("{:<2}", links));
    }
    if let Some(size) = md.size {
        field(format_file_size(size, human_readable));
    }
    if let Some(modified) = md.modified {
        field(format_file_time(modified));
    }
}

/// Unix-style permission string such as `drwxr-xr-x`.
pub fn format_permissions(kind: EntryKind, mode: u32) -> String {
    let first = match kind {
        EntryKind::Directory => 'd',
        EntryKind::Symlink => 'l',
        EntryKind::File => '-',
    };
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Raw byte count, or a binary-prefixed size (`KiB`, `MiB`, ...) when `human_readable`.
pub fn format_file_size(size: u64, human_readable: bool) -> String {
    if human_readable {
        format_size(size, BINARY)
    } else {
        size.to_string()
    }
}

/// Local modification time as `YYYY-MM-DD HH:MM`.
pub fn format_file_time(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format("%Y-%m-%d %H:%M").to_string()
}
