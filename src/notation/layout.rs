//! Column arithmetic for chords rendered above lyrics.
//!
//! Columns are display columns: one per character, tabs running to the next
//! tab stop. Everything here walks `char`s, never bytes, so multi-byte
//! letters (ą, ę, ł, ż, ...) count as one column and are never split.

use crate::constants::layout::{PLACEHOLDER, TAB_WIDTH};
use crate::types::{ChordToken, ColumnLayout};

/// Layout tuning for rendering chord rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Display width of a tab stop (default: 4). Zero behaves as one.
    pub tab_width: usize,
    /// Filler for chord-row columns without a label (default: U+00A0).
    pub placeholder: char,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            tab_width: TAB_WIDTH,
            placeholder: PLACEHOLDER,
        }
    }
}

impl LayoutOptions {
    const fn tab(&self) -> usize {
        if self.tab_width == 0 { 1 } else { self.tab_width }
    }
}

/// Column reached after drawing `c` at `column`.
///
/// A tab consumes `tab_width - column % tab_width` columns, so a tab on a
/// tab stop takes the full width.
pub const fn advance(column: usize, c: char, tab_width: usize) -> usize {
    if c == '\t' {
        column + (tab_width - column % tab_width)
    } else {
        column + 1
    }
}

/// Every whitespace-delimited token on `line` with its starting display column.
pub fn token_columns(line: &str, tab_width: usize) -> Vec<ChordToken> {
    let tab_width = tab_width.max(1);
    let mut tokens = Vec::new();
    let mut current: Option<ChordToken> = None;
    let mut column = 0;

    for c in line.chars() {
        if c.is_whitespace() {
            tokens.extend(current.take());
        } else {
            current
                .get_or_insert_with(|| ChordToken { text: String::new(), column })
                .text
                .push(c);
        }
        column = advance(column, c, tab_width);
    }
    tokens.extend(current);
    tokens
}

/// Character index in `line` whose display span covers `column`.
///
/// Past the end of the line this clamps to the line's length in characters.
pub fn char_index_at_column(line: &str, column: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut start = 0;
    for (idx, c) in line.chars().enumerate() {
        let end = advance(start, c, tab_width);
        if column < end {
            return idx;
        }
        start = end;
    }
    line.chars().count()
}

/// Index of the `]` closing a `[` at `open`, if the bracket is terminated.
pub fn find_closing(chars: &[char], open: usize) -> Option<usize> {
    chars
        .iter()
        .skip(open + 1)
        .position(|&c| c == ']')
        .map(|offset| open + 1 + offset)
}

/// Trimmed label and closing index of a bracket chord opening at `open`.
///
/// `None` when the bracket is unterminated or holds only whitespace; that
/// `[` is then ordinary text.
pub fn bracket_label(chars: &[char], open: usize) -> Option<(String, usize)> {
    let close = find_closing(chars, open)?;
    let label: String = chars[open + 1..close].iter().collect();
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    Some((label.to_string(), close))
}

/// Whether the line holds at least one terminated, non-empty `[...]` chord.
pub fn has_bracket_chord(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, &c)| c == '[' && bracket_label(&chars, i).is_some())
}

/// Render one inline-notation line into a chord row and a lyric row.
pub fn render_column_layout(line: &str) -> ColumnLayout {
    render_column_layout_with(line, &LayoutOptions::default())
}

/// [`render_column_layout`] with explicit options.
///
/// Bracketed labels take no width in the lyric row; their text is written
/// into the chord row at the current lyric column. A label that would run
/// into the previous one is pushed right to leave one free column. An
/// unterminated or empty bracket is ordinary text. Tabs are expanded in
/// both rows.
pub fn render_column_layout_with(line: &str, options: &LayoutOptions) -> ColumnLayout {
    let tab_width = options.tab();
    let chars: Vec<char> = line.chars().collect();
    let mut row: Vec<char> = Vec::with_capacity(chars.len());
    let mut lyric = String::with_capacity(line.len());
    let mut column = 0;
    let mut next_free = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '[' {
            if let Some((label, close)) = bracket_label(&chars, i) {
                let start = column.max(next_free);
                let width = label.chars().count();
                pad(&mut row, start + width, options.placeholder);
                for (slot, ch) in row[start..start + width].iter_mut().zip(label.chars()) {
                    *slot = ch;
                }
                next_free = start + width + 1;
                i = close + 1;
                continue;
            }
        }

        let next = advance(column, c, tab_width);
        pad(&mut row, next, options.placeholder);
        if c == '\t' {
            lyric.push_str(&" ".repeat(next - column));
        } else {
            lyric.push(c);
        }
        column = next;
        i += 1;
    }

    ColumnLayout {
        chord_row: row.into_iter().collect(),
        lyric_row: lyric,
    }
}

/// Grow `row` with the placeholder up to `width`. Never shrinks.
fn pad(row: &mut Vec<char>, width: usize, placeholder: char) {
    if row.len() < width {
        row.resize(width, placeholder);
    }
}
