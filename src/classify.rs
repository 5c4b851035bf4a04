//! Maps entry metadata onto its icon, color and link destination.

use crate::types::{Color, EntryMetadata, EntryRepresentation, Icon};

/// Classifies an entry from metadata the caller already read.
///
/// Checks run in a fixed order and the first match wins: directories, then
/// symbolic links, then executables, then everything else. A directory with
/// execute bits is still a directory, and a link to a directory is still a link.
/// Broken links keep the link icon with no target.
pub fn classify(metadata: &EntryMetadata) -> EntryRepresentation {
    if metadata.is_dir() {
        return EntryRepresentation {
            icon: Icon::Folder,
            color: Color::Blue,
            symlink_target: None,
        };
    }
    if metadata.is_symlink() {
        return EntryRepresentation {
            icon: Icon::Link,
            color: Color::Yellow,
            symlink_target: metadata.link_target.clone(),
        };
    }
    if metadata.executable {
        return EntryRepresentation {
            icon: Icon::Gear,
            color: Color::Red,
            symlink_target: None,
        };
    }
    EntryRepresentation {
        icon: Icon::Document,
        color: Color::White,
        symlink_target: None,
    }
}
