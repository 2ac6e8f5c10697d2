//! Chord grammar and line classification.
//!
//! A token is a chord when the whole token matches: a root letter `A`-`H`
//! (either case, `H` being the German B), an optional `#` or `b`, an optional
//! quality from a fixed vocabulary, optional digits, and an optional `/bass`.
//! This is the only definition of "chord" in the crate; the classifier, the
//! over-text converter and the transposer all go through it.

// Allow expect for the compile-time constant regex pattern in the LazyLock block
#![allow(clippy::expect_used)]

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::constants::grammar::CHORD_LINE_RATIO;
use crate::error::Error;
use crate::types::{Accidental, ClassifiedLine, LineKind, Note};

/// Full-token chord pattern with named parts.
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<root>[A-Ha-h])(?P<accidental>[#b])?",
        r"(?P<quality>(?:maj|min|aug|dim|sus|add|m|M)?\d*)",
        r"(?:/(?P<bass>[A-Ha-h])(?P<bass_accidental>[#b])?)?$",
    ))
    .expect("valid regex: RE_CHORD")
});

/// Whether `token` is, in its entirety, a chord name.
///
/// Substrings never count: `"a"` is a chord, `"zawołali"` is not.
pub fn is_chord(token: &str) -> bool {
    RE_CHORD.is_match(token)
}

/// A chord decomposed into root, quality suffix and optional bass note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    /// Root note, case as written.
    pub root: Note,
    /// Everything between the root and the slash (`m`, `maj7`, `sus4`, `add9`, ...).
    pub quality: String,
    /// Bass note of a slash chord.
    pub bass: Option<Note>,
}

impl Chord {
    /// Decompose a label, or `None` if it is not a chord.
    pub fn parse(label: &str) -> Option<Self> {
        let caps = RE_CHORD.captures(label)?;
        let root = note_from_captures(&caps, "root", "accidental")?;
        let bass = caps
            .name("bass")
            .and_then(|_| note_from_captures(&caps, "bass", "bass_accidental"));
        let quality = caps.name("quality").map_or("", |m| m.as_str()).to_string();

        Some(Self { root, quality, bass })
    }
}

fn note_from_captures(caps: &Captures<'_>, letter: &str, accidental: &str) -> Option<Note> {
    let letter = caps.name(letter)?.as_str().chars().next()?;
    let accidental = caps
        .name(accidental)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Accidental::from_char);
    Some(Note::new(letter, accidental))
}

impl FromStr for Chord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::invalid_chord(s))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{bass}")?;
        }
        Ok(())
    }
}

/// Classify one line of raw song text.
///
/// Looks at this line only. Pairing a chord line with the lyric line below it
/// is the converter's business.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Empty;
    }
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return LineKind::Directive;
    }
    if trimmed.starts_with('#') {
        return LineKind::Comment;
    }

    let (total, chords) = trimmed
        .split_whitespace()
        .fold((0usize, 0usize), |(total, chords), token| {
            (total + 1, chords + usize::from(is_chord(token)))
        });

    if chords == 0 {
        return LineKind::Lyrics;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = chords as f64 / total as f64;
    let kind = if ratio >= CHORD_LINE_RATIO { LineKind::Chords } else { LineKind::Lyrics };
    tracing::trace!(chords, total, %kind, "classified line");
    kind
}

/// Classify every line of a block of text, in order.
pub fn classify_lines(text: &str) -> Vec<ClassifiedLine> {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| ClassifiedLine {
            index,
            kind: classify_line(line),
            text: line.to_string(),
        })
        .collect()
}

/// How many lines fall into each kind, in classification order.
///
/// Every kind is listed, including those with a count of zero.
pub fn count_line_kinds(lines: &[ClassifiedLine]) -> Vec<(LineKind, usize)> {
    LineKind::all()
        .iter()
        .map(|&kind| (kind, lines.iter().filter(|line| line.kind == kind).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_simple_chords() {
        for token in ["C", "Am", "F#", "Bb", "Dm7", "Cmaj7", "Gsus4", "Cadd9", "Edim", "Caug", "G7"] {
            assert!(is_chord(token), "{token} should be a chord");
        }
    }

    #[test]
    fn test_lowercase_and_german_roots() {
        for token in ["a", "e", "d7", "h", "Hm", "f", "bb", "ab"] {
            assert!(is_chord(token), "{token} should be a chord");
        }
    }

    #[test]
    fn test_slash_chords() {
        assert!(is_chord("C/G"));
        assert!(is_chord("Am7/G"));
        assert!(is_chord("D/F#"));
        assert!(is_chord("Eb/Bb"));
        assert!(!is_chord("C/"));
        assert!(!is_chord("C/X"));
    }

    #[test]
    fn test_words_are_not_chords() {
        for token in ["zawołali", "Hello", "abc", "Chorus", "x2", "(2x)", "Cm7b5", "", "E7sus4"] {
            assert!(!is_chord(token), "{token} should not be a chord");
        }
    }

    #[test]
    fn test_chord_parse_parts() {
        let chord = Chord::parse("C#m7/G#").unwrap();
        assert_eq!(chord.root, Note::new('C', Some(Accidental::Sharp)));
        assert_eq!(chord.quality, "m7");
        assert_eq!(chord.bass, Some(Note::new('G', Some(Accidental::Sharp))));

        let chord = Chord::parse("bb").unwrap();
        assert_eq!(chord.root, Note::new('b', Some(Accidental::Flat)));
        assert_eq!(chord.quality, "");
        assert_eq!(chord.bass, None);
    }

    #[test]
    fn test_chord_display_round_trips_spelling() {
        for label in ["C", "am", "Bbmaj7", "D/F#", "Hm", "Gsus4/D"] {
            assert_eq!(Chord::parse(label).unwrap().to_string(), label);
        }
    }

    #[test]
    fn test_chord_from_str_error() {
        let err = "Refren".parse::<Chord>().unwrap_err();
        assert!(matches!(err, Error::InvalidChord { .. }));
        assert!("Em".parse::<Chord>().is_ok());
    }

    #[test]
    fn test_classify_chord_line() {
        assert_eq!(classify_line("C        Am       F         G"), LineKind::Chords);
        assert_eq!(classify_line("  D   A/C#  Bm"), LineKind::Chords);
        // 3 of 4 tokens are chords
        assert_eq!(classify_line("C G Am (x2)"), LineKind::Chords);
    }

    #[test]
    fn test_classify_lyric_with_chord_like_word() {
        assert_eq!(classify_line("a witając zawołali"), LineKind::Lyrics);
        assert_eq!(classify_line("To jest przykład piosenki z akordami"), LineKind::Lyrics);
        // 1 of 2 is below the threshold
        assert_eq!(classify_line("C (x2)"), LineKind::Lyrics);
    }

    #[test]
    fn test_classify_other_kinds() {
        assert_eq!(classify_line(""), LineKind::Empty);
        assert_eq!(classify_line(" \t "), LineKind::Empty);
        assert_eq!(classify_line("{title: Barka}"), LineKind::Directive);
        assert_eq!(classify_line("  {soc}  "), LineKind::Directive);
        assert_eq!(classify_line("# capo 2"), LineKind::Comment);
    }

    #[test]
    fn test_count_line_kinds() {
        let lines = classify_lines("{title: Barka}\nG D\nPan kiedyś stanął\nEm D\nnad brzegiem");
        assert_eq!(
            count_line_kinds(&lines),
            vec![
                (LineKind::Empty, 0),
                (LineKind::Directive, 1),
                (LineKind::Comment, 0),
                (LineKind::Chords, 2),
                (LineKind::Lyrics, 2),
            ]
        );
    }

    #[test]
    fn test_classify_lines_keeps_order() {
        let lines = classify_lines("G D\nPan kiedyś stanął\n\n{soc}");
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::Chords, LineKind::Lyrics, LineKind::Empty, LineKind::Directive]
        );
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[1].text, "Pan kiedyś stanął");
    }
}
