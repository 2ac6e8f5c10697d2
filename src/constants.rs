//! Notation constants.
//!
//! Centralizes magic numbers used by the chord notation engine.

/// Column layout constants.
pub mod layout {
    /// Display width of a literal tab character.
    pub const TAB_WIDTH: usize = 4;

    /// Filler written into the chord row where no chord label sits.
    pub const PLACEHOLDER: char = '\u{00A0}';
}

/// Line classification constants.
pub mod grammar {
    /// Minimum share of chord tokens for a line to count as a chord line.
    ///
    /// Low enough to accept chord lines carrying timing annotations, high
    /// enough that a lyric starting with the Polish conjunction "a" stays
    /// a lyric line.
    pub const CHORD_LINE_RATIO: f64 = 0.6;
}

/// Music theory constants.
pub mod pitch {
    /// Number of semitones in an octave.
    pub const SEMITONES: u8 = 12;
}
