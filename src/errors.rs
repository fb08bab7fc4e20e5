//! Error types for music theory values
//!
//! Parsing failures and checked lookups. Unchecked degree access keeps its
//! fail-fast behaviour and panics instead of returning one of these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Scale degree outside `1..=len`
    #[error("Scale degree {degree} out of range (scale has {len} degrees)")]
    DegreeOutOfRange { degree: usize, len: usize },

    /// Letter is not one of C, D, E, F, G, A, B
    #[error("Invalid note name: '{0}'")]
    InvalidNoteName(String),

    /// Accidental text is not a run of sharps or a run of flats
    #[error("Invalid accidental: '{0}'")]
    InvalidAccidental(String),

    #[error("Invalid octave: '{0}'")]
    InvalidOctave(String),

    #[error("Unknown scale template: '{0}'. Expected one of: major, minor, harmonic-minor")]
    UnknownTemplate(String),

    #[error("Unknown mode: '{0}'. Expected one of: ionian, dorian, phrygian, lydian, mixolydian, aeolian, locrian")]
    UnknownMode(String),

    #[error("Unknown chord type: '{0}'")]
    UnknownChord(String),
}
