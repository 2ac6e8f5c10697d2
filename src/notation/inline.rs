//! Inline bracket notation back to chords-over-text.

use super::layout::{has_bracket_chord, render_column_layout_with, LayoutOptions};

/// Convert inline notation to chords-over-text notation.
///
/// Every line holding a bracket chord becomes two lines, chord row first.
/// Alignment is column-exact, not whitespace-exact: converting back with
/// [`super::over_text_to_inline`] restores the chords but not necessarily
/// the spacing of an original over-text source.
pub fn inline_to_over_text(text: &str) -> String {
    inline_to_over_text_with(text, &LayoutOptions::default())
}

/// [`inline_to_over_text`] with explicit options.
///
/// The placeholder only pads inside the chord row; in the output it is
/// replaced by plain spaces and trailing padding is dropped, so the result
/// can be edited and parsed again.
pub fn inline_to_over_text_with(text: &str, options: &LayoutOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if !has_bracket_chord(line) {
            out.push(line.to_string());
            continue;
        }

        let layout = render_column_layout_with(line, options);
        let chord_row = layout
            .chord_row
            .trim_end_matches(options.placeholder)
            .replace(options.placeholder, " ");
        out.push(chord_row);
        out.push(layout.lyric_row);
    }

    tracing::debug!(lines_out = out.len(), "converted to over-text");
    out.join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::notation::over_text_to_inline;

    #[test]
    fn test_two_rows_per_chord_line() {
        let out = inline_to_over_text("[C]To jest [Am]przykład");
        assert_eq!(out, "C       Am\nTo jest przykład");
    }

    #[test]
    fn test_plain_lines_not_duplicated() {
        let out = inline_to_over_text("Zwrotka\n[G]La la\n\nKoniec");
        assert_eq!(out, "Zwrotka\nG\nLa la\n\nKoniec");
    }

    #[test]
    fn test_chord_only_line_gives_empty_lyric_row() {
        let out = inline_to_over_text("[C][Am][F][G]");
        assert_eq!(out, "C Am F G\n");
        assert_eq!(out.split('\n').count(), 2);
    }

    #[test]
    fn test_unterminated_bracket_is_plain_line() {
        assert_eq!(inline_to_over_text("Tekst [C"), "Tekst [C");
    }

    #[test]
    fn test_empty_brackets_are_not_chords() {
        assert_eq!(inline_to_over_text("Tekst []bez akordu"), "Tekst []bez akordu");
        assert_eq!(inline_to_over_text("[C]la []la"), "C\nla []la");
    }

    #[test]
    fn test_empty_brackets_survive_round_trip() {
        let inline = "[C]la []la";
        assert_eq!(over_text_to_inline(&inline_to_over_text(inline)), inline);
    }

    #[test]
    fn test_round_trip_back_to_inline() {
        let inline = "[D]Pan kiedyś [A]stanął\n[Hm]nad brzegiem";
        assert_eq!(over_text_to_inline(&inline_to_over_text(inline)), inline);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(inline_to_over_text(""), "");
        assert_eq!(inline_to_over_text(" \n "), "");
    }
}
