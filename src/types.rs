//! Core type definitions shared by the notation engine.
//!
//! Everything here is a small immutable value derived from text; nothing is
//! persisted. The host application only ever stores inline notation strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The computed classification of a single line of song text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Mostly chord tokens separated by whitespace.
    #[serde(rename = "chord-line")]
    Chords,
    /// Ordinary lyric text.
    #[serde(rename = "lyric-line")]
    Lyrics,
    /// Empty or whitespace-only.
    #[serde(rename = "empty-line")]
    Empty,
    /// A `{...}` directive such as `{title: ...}`.
    #[serde(rename = "directive-line")]
    Directive,
    /// A `#` comment.
    #[serde(rename = "comment-line")]
    Comment,
}

impl LineKind {
    /// Returns all line kinds in classification order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Empty, Self::Directive, Self::Comment, Self::Chords, Self::Lyrics]
    }

    /// Returns the tag used for this kind in serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chords => "chord-line",
            Self::Lyrics => "lyric-line",
            Self::Empty => "empty-line",
            Self::Directive => "directive-line",
            Self::Comment => "comment-line",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A line of text together with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    /// Zero-based line number within the input.
    pub index: usize,
    /// Derived tag.
    pub kind: LineKind,
    /// The raw line text.
    pub text: String,
}

/// A maximal non-whitespace run on a line and the display column it starts at.
///
/// Columns count characters, not bytes, with tabs expanded to the next tab stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordToken {
    /// Raw token text.
    pub text: String,
    /// Display column of the first character.
    pub column: usize,
}

/// Chord row and lyric row rendered from one line of inline notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    /// Chord labels at their display columns, padded with the placeholder.
    pub chord_row: String,
    /// The line with every bracketed chord removed.
    pub lyric_row: String,
}

/// A sharp or flat sign after a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    /// `#`
    Sharp,
    /// `b`
    Flat,
}

impl Accidental {
    /// Parse the accidental sign, if `c` is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Sharp),
            'b' => Some(Self::Flat),
            _ => None,
        }
    }

    /// The sign as written in chord names.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Sharp => '#',
            Self::Flat => 'b',
        }
    }
}

/// Which of the two naming tables to spell a pitch with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    /// `C#`, `D#`, `F#`, `G#`, `A#`
    #[default]
    Sharp,
    /// `Db`, `Eb`, `Gb`, `Ab`, `Bb`
    Flat,
}

impl Spelling {
    /// Spelling that keeps the flavour of an existing accidental.
    ///
    /// Flats stay flat; sharps and naturals are spelled with sharps.
    #[must_use]
    pub const fn following(accidental: Option<Accidental>) -> Self {
        match accidental {
            Some(Accidental::Flat) => Self::Flat,
            Some(Accidental::Sharp) | None => Self::Sharp,
        }
    }
}

/// A note name: letter plus optional accidental, case preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    /// Letter as written (`A`-`H` or `a`-`h`).
    pub letter: char,
    /// Optional sharp or flat.
    pub accidental: Option<Accidental>,
}

impl Note {
    /// Create a new note.
    #[must_use]
    pub const fn new(letter: char, accidental: Option<Accidental>) -> Self {
        Self { letter, accidental }
    }

    /// Whether the letter was written in lowercase (minor shorthand).
    #[must_use]
    pub const fn is_lowercase(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(acc) = self.accidental {
            write!(f, "{}", acc.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_line_kind_serializes_as_tag() {
        let json = serde_json::to_string(&LineKind::Chords).unwrap();
        assert_eq!(json, "\"chord-line\"");
        for kind in LineKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_spelling_follows_accidental() {
        assert_eq!(Spelling::following(Some(Accidental::Flat)), Spelling::Flat);
        assert_eq!(Spelling::following(Some(Accidental::Sharp)), Spelling::Sharp);
        assert_eq!(Spelling::following(None), Spelling::Sharp);
    }

    #[test]
    fn test_note_display() {
        assert_eq!(Note::new('B', Some(Accidental::Flat)).to_string(), "Bb");
        assert_eq!(Note::new('f', Some(Accidental::Sharp)).to_string(), "f#");
        assert_eq!(Note::new('H', None).to_string(), "H");
    }
}
