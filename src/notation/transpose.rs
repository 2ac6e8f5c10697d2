//! Semitone transposition of bracketed chords.
//!
//! Only the contents of `[...]` are touched. Anything that is not a chord
//! by the grammar (section names, comments, typos) comes out exactly as it
//! went in.

use regex::Captures;

use super::grammar::Chord;
use super::pitch::{normalize_offset, Pitch};
use super::RE_BRACKET;
use crate::types::{Accidental, Note, Spelling};

/// Shift every bracketed chord in `content` by `semitones`.
///
/// Any integer works; the offset is folded into `0..=11` first and a zero
/// offset returns the input untouched.
pub fn transpose(content: &str, semitones: i32) -> String {
    let offset = normalize_offset(semitones);
    if offset == 0 {
        return content.to_string();
    }

    let mut labels = 0usize;
    let out = RE_BRACKET.replace_all(content, |caps: &Captures<'_>| {
        labels += 1;
        format!("[{}]", transpose_chord(&caps[1], offset))
    });

    tracing::debug!(semitones, offset, labels, "transposed content");
    out.into_owned()
}

/// Shift a single chord label by `semitones`.
///
/// Root and bass are moved independently. Each keeps its flavour: a flat
/// note is respelled from the flat table, anything else from the sharp
/// table, and a lowercase root stays lowercase.
pub fn transpose_chord(label: &str, semitones: i32) -> String {
    let offset = normalize_offset(semitones);
    let trimmed = label.trim();

    let Some(chord) = Chord::parse(trimmed).filter(|_| offset != 0) else {
        return label.to_string();
    };
    let Some(root) = transpose_note(chord.root, offset) else {
        return label.to_string();
    };
    let bass = match chord.bass.map(|bass| transpose_note(bass, offset)) {
        Some(None) => return label.to_string(),
        Some(bass) => bass,
        None => None,
    };

    let leading = &label[..label.len() - label.trim_start().len()];
    let trailing = &label[label.trim_end().len()..];
    let moved = Chord { root, quality: chord.quality, bass };
    format!("{leading}{moved}{trailing}")
}

fn transpose_note(note: Note, offset: i32) -> Option<Note> {
    let pitch = Pitch::from_note(note)?.transposed(offset);
    let mut name = pitch.name(Spelling::following(note.accidental)).chars();

    let letter = name.next()?;
    let letter = if note.is_lowercase() { letter.to_ascii_lowercase() } else { letter };
    let accidental = name.next().and_then(Accidental::from_char);

    Some(Note::new(letter, accidental))
}
