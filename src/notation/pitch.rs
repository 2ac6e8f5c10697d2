//! Chromatic pitch arithmetic.
//!
//! One note-name table shared by the transposer and anything else that needs
//! to know what a note is worth.

use std::fmt;

use crate::constants::pitch::SEMITONES;
use crate::types::{Note, Spelling};

/// Sharp-preferred spellings indexed by pitch.
pub const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Flat-preferred spellings indexed by pitch.
pub const FLAT_NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Every accepted note spelling and its pitch, enharmonics included.
/// German `H` is not listed, so chords rooted on it are left as written.
const NOTE_PITCHES: &[(&str, u8)] = &[
    ("C", 0), ("B#", 0),
    ("C#", 1), ("Db", 1),
    ("D", 2),
    ("D#", 3), ("Eb", 3),
    ("E", 4), ("Fb", 4),
    ("F", 5), ("E#", 5),
    ("F#", 6), ("Gb", 6),
    ("G", 7),
    ("G#", 8), ("Ab", 8),
    ("A", 9),
    ("A#", 10), ("Bb", 10),
    ("B", 11), ("Cb", 11),
];

/// A position in the twelve-tone scale, 0 (C) through 11 (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch(u8);

impl Pitch {
    /// Pitch for a raw integer, wrapped into the octave.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value % SEMITONES)
    }

    /// Look up a note name such as `"Eb"` or `"f#"`. Case-insensitive on the letter.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let mut key = String::with_capacity(name.len());
        key.push(letter);
        key.extend(chars);

        NOTE_PITCHES
            .iter()
            .find(|(spelling, _)| *spelling == key)
            .map(|&(_, value)| Self(value))
    }

    /// Look up a parsed note.
    pub fn from_note(note: Note) -> Option<Self> {
        Self::from_name(&note.to_string())
    }

    /// Integer value, 0..=11.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Uppercase name from the requested spelling table.
    #[must_use]
    pub const fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => SHARP_NAMES[self.0 as usize],
            Spelling::Flat => FLAT_NAMES[self.0 as usize],
        }
    }

    /// Shift by any number of semitones, wrapping around the octave.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn transposed(self, semitones: i32) -> Self {
        Self::new((self.0 as i32 + normalize_offset(semitones)) as u8)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Spelling::Sharp))
    }
}

/// Fold any semitone offset into `0..=11`.
#[allow(clippy::cast_lossless)]
pub const fn normalize_offset(semitones: i32) -> i32 {
    semitones.rem_euclid(SEMITONES as i32)
}
