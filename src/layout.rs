//! Width measurement and compact-grid packing.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Width used when the output is not a terminal.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

static ESCAPE_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{1b}\\[[0-9;]*m").expect("escape pattern is valid"));

/// Removes SGR color escape sequences from `text`.
pub fn strip_escapes(text: &str) -> std::borrow::Cow<'_, str> {
    ESCAPE_SEQUENCE.replace_all(text, "")
}

/// Number of terminal columns `text` occupies once color escapes are removed.
///
/// Wide glyphs such as emoji icons count as two columns.
pub fn visible_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_escapes(text).as_ref())
}

/// Width of the terminal standard output is attached to, or [`DEFAULT_TERMINAL_WIDTH`]
/// when output goes to a pipe or file.
pub fn terminal_width() -> usize {
    term_size::dimensions_stdout()
        .map(|(w, _)| w)
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Packs rendered cells left to right into ragged lines no wider than `width`.
///
/// A newline is emitted before a cell that would overflow a non-empty line. A
/// cell wider than `width` on its own still gets a line to itself, unsplit.
pub fn pack_grid<S: AsRef<str>>(cells: &[S], width: usize) -> String {
    let mut out = String::new();
    let mut line_width = 0;
    for cell in cells {
        let cell = cell.as_ref();
        let cell_width = visible_width(cell);
        if line_width + cell_width > width && line_width > 0 {
            out.push('\n');
            line_width = 0;
        }
        out.push_str(cell);
        line_width += cell_width;
    }
    out
}
