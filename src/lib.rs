//! `chordsheet` - chord notation engine for song lyrics.
//!
//! Converts between chords-over-text and inline `[C]bracket` notation,
//! realigns chords to lyric columns, transposes by semitones and strips
//! chords for plain-lyrics display. All operations are pure functions over
//! strings; the host application stores only the inline form.

pub mod config;
pub mod constants;
pub mod error;
pub mod notation;
pub mod types;

pub use error::{Error, Result};
pub use notation::{
    inline_to_over_text, over_text_to_inline, render_column_layout, strip_chords, transpose,
    used_chords,
};
pub use types::{ColumnLayout, LineKind};
