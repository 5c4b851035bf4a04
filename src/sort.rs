use crate::options::SortKey;
use crate::types::Entry;
use std::cmp::{Ordering, Reverse};
use std::time::SystemTime;

/// Sorts entries in place. The sort is stable, so ties keep enumeration order.
///
/// Names compare case-folded and ascending; times and sizes compare
/// descending. Missing times sort as oldest, missing sizes as zero, and
/// directories carry no content size.
pub fn sort_entries(entries: &mut [Entry], key: SortKey) {
    match key {
        SortKey::Name => entries.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::ModifiedTime => entries.sort_by_key(|e| Reverse(modified_key(e))),
        SortKey::Size => entries.sort_by_key(|e| Reverse(size_key(e))),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

// `None` orders below every time, so unreadable times land last.
fn modified_key(entry: &Entry) -> Option<SystemTime> {
    entry.metadata.modified
}

fn size_key(entry: &Entry) -> u64 {
    if entry.metadata.is_dir() {
        0
    } else {
        entry.metadata.size.unwrap_or(0)
    }
}
