//! Chord removal for plain-lyrics display.

use super::RE_BRACKET;

/// Remove every `[...]` chord from inline notation.
///
/// Blank lines survive as verse breaks. A line that held nothing but chords
/// disappears instead of leaving a gap.
pub fn strip_chords(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    content
        .split('\n')
        .filter_map(|line| {
            let stripped = RE_BRACKET.replace_all(line, "");
            if !stripped.trim().is_empty() {
                Some(stripped.into_owned())
            } else if line.trim().is_empty() {
                Some(String::new())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
