//! Chord notation engine.
//!
//! Pure text transformations between the two ways songs are written down:
//!
//! - chords-over-text: a line of chord names stacked above the lyric line,
//!   aligned by column
//! - inline: `[C]lyrics with [G]chords` on a single line, the form that is
//!   stored and displayed
//!
//! plus transposition and chord stripping on the inline form. Every function
//! is total: malformed input degrades to pass-through, never to an error.

// Allow expect for the compile-time constant regex pattern in the LazyLock block
#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

pub mod grammar;
pub mod inline;
pub mod layout;
pub mod over_text;
pub mod pitch;
pub mod strip;
pub mod transpose;

pub use grammar::{classify_line, classify_lines, count_line_kinds, is_chord, Chord};
pub use inline::{inline_to_over_text, inline_to_over_text_with};
pub use layout::{render_column_layout, render_column_layout_with, LayoutOptions};
pub use over_text::{over_text_to_inline, over_text_to_inline_with};
pub use pitch::Pitch;
pub use strip::strip_chords;
pub use transpose::{transpose, transpose_chord};

/// A `[...]` run terminated on the same line; group 1 is the label.
static RE_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]\n]*)\]").expect("valid regex: RE_BRACKET")
});

/// Distinct chords used in inline content, in order of first appearance.
///
/// Labels are trimmed; bracketed text that is not a chord is skipped.
pub fn used_chords(content: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for caps in RE_BRACKET.captures_iter(content) {
        let label = caps[1].trim();
        if is_chord(label) && !seen.iter().any(|chord| chord == label) {
            seen.push(label.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_used_chords_first_appearance() {
        let content = "[G]Pan [D]kiedyś\n[Refren]\n[ G ]nad [Em]brzegiem [D]";
        assert_eq!(used_chords(content), vec!["G", "D", "Em"]);
    }

    #[test]
    fn test_used_chords_none() {
        assert!(used_chords("bez akordów [").is_empty());
    }

    #[test]
    fn test_used_chords_bracket_does_not_span_lines() {
        assert_eq!(used_chords("Refren [x2\n[C]la [G]la"), vec!["C", "G"]);
    }
}
