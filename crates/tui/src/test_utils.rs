//! Test utilities for the TUI crate.
//!
//! Helpers for asserting on rendered buffers: flattening a buffer to text and
//! locating text by cell position.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per row.
///
/// Trailing whitespace is trimmed from each line.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Finds the cell position where `needle` starts, scanning rows top to bottom.
///
/// Matching is done on cell symbols, so multi-byte glyphs earlier in the row
/// (borders, icons) do not skew the reported column.
#[must_use]
pub(crate) fn find_text(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let area = buf.area;
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let mut candidate = String::new();
            for cx in x..area.right() {
                if let Some(cell) = buf.cell((cx, y)) {
                    candidate.push_str(cell.symbol());
                }
                if candidate.len() >= needle.len() {
                    break;
                }
            }
            if candidate.starts_with(needle) {
                return Some((x, y));
            }
        }
    }
    None
}
