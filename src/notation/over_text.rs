//! Chords-over-text to inline bracket notation.
//!
//! Authors type chords on their own line, aligned by column above the lyric
//! they belong to. This folds each such pair into one `[C]lyric` line.

use super::grammar::{classify_line, is_chord};
use super::layout::{char_index_at_column, token_columns, LayoutOptions};
use crate::types::{ChordToken, LineKind};

/// Convert chords-over-text notation to inline notation.
pub fn over_text_to_inline(text: &str) -> String {
    over_text_to_inline_with(text, &LayoutOptions::default())
}

/// [`over_text_to_inline`] with explicit tab width.
///
/// A chord line followed by any line that is not itself a chord line is
/// merged into it. A chord line with nothing usable below (another chord
/// line, or end of input) becomes `[C] [G] ...`. Other lines pass through.
pub fn over_text_to_inline_with(text: &str, options: &LayoutOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if classify_line(line) != LineKind::Chords {
            out.push(line.to_string());
            i += 1;
            continue;
        }

        let chords: Vec<ChordToken> = token_columns(line, options.tab_width)
            .into_iter()
            .filter(|token| is_chord(&token.text))
            .collect();

        match lines.get(i + 1) {
            Some(next) if classify_line(next) != LineKind::Chords => {
                tracing::trace!(line = i, chords = chords.len(), "merging chord line into lyric");
                out.push(merge_into_lyric(chords, next, options));
                i += 2;
            }
            _ => {
                tracing::trace!(line = i, chords = chords.len(), "chord line without lyric");
                out.push(bracket_list(&chords));
                i += 1;
            }
        }
    }

    tracing::debug!(lines_in = lines.len(), lines_out = out.len(), "converted to inline");
    out.join("\n")
}

/// Insert `[chord]` into `lyric` at each chord's column, rightmost first so
/// that earlier insertions never move the positions still to come.
fn merge_into_lyric(mut chords: Vec<ChordToken>, lyric: &str, options: &LayoutOptions) -> String {
    let (body, line_end) = lyric
        .strip_suffix('\r')
        .map_or((lyric, ""), |body| (body, "\r"));
    let mut chars: Vec<char> = body.chars().collect();

    chords.sort_by(|a, b| b.column.cmp(&a.column));
    for chord in chords {
        let at = char_index_at_column(body, chord.column, options.tab_width).min(chars.len());
        let bracketed = format!("[{}]", chord.text);
        chars.splice(at..at, bracketed.chars());
    }

    let mut merged: String = chars.into_iter().collect();
    merged.push_str(line_end);
    merged
}

fn bracket_list(chords: &[ChordToken]) -> String {
    chords
        .iter()
        .map(|chord| format!("[{}]", chord.text))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_simple_pair() {
        let input = "C       G\nPan kiedyś stanął";
        assert_eq!(over_text_to_inline(input), "[C]Pan kied[G]yś stanął");
    }

    #[test]
    fn test_leading_spaces_count() {
        let input = "    Am\nZnam ten głos";
        assert_eq!(over_text_to_inline(input), "Znam[Am] ten głos");
    }

    #[test]
    fn test_chords_past_end_clamp() {
        let input = "C        G\nLa";
        assert_eq!(over_text_to_inline(input), "[C]La[G]");
    }

    #[test]
    fn test_non_chord_tokens_dropped_from_pair() {
        let input = "C  G  Am  x2\nabcdefghijkl";
        assert_eq!(over_text_to_inline(input), "[C]abc[G]def[Am]ghijkl");
    }

    #[test]
    fn test_chord_line_followed_by_chord_line() {
        let input = "C   G\nAm    F\nTekst";
        assert_eq!(over_text_to_inline(input), "[C] [G]\n[Am]Tekst[F]");
    }

    #[test]
    fn test_chord_line_at_end() {
        let input = "Tekst\nD  A  x2  G";
        assert_eq!(over_text_to_inline(input), "Tekst\n[D] [A] [G]");
    }

    #[test]
    fn test_lyrics_directives_and_blank_lines_pass_through() {
        let input = "{title: Barka}\n# capo 2\n\na witając zawołali";
        assert_eq!(over_text_to_inline(input), input);
    }

    #[test]
    fn test_tabs_keep_alignment() {
        let input = "\tG\n\tŚpiewaj";
        assert_eq!(over_text_to_inline(input), "\t[G]Śpiewaj");
    }

    #[test]
    fn test_crlf_lyric_keeps_line_end() {
        let input = "C     G\r\nabc\r\nnext";
        assert_eq!(over_text_to_inline(input), "[C]abc[G]\r\nnext");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(over_text_to_inline(""), "");
        assert_eq!(over_text_to_inline("  \n\t\n"), "");
    }
}
