//! Spelled note representation
//!
//! A `Note` is a letter name, a signed accidental modifier and a relative
//! octave index. Equality is structural: C#0 and Db0 are different notes
//! even though they share a pitch class.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::note_name::NoteName;
use crate::errors::TheoryError;
use crate::utils::pitch_utils::{accidental_symbols, parse_accidentals, pitch_class, FLAT, SHARP};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    name: NoteName,

    /// Negative is flatward (-1 flat, -2 double flat), positive is sharpward
    modifier: i8,

    /// Sequencing index assigned by scale construction, not an acoustic octave
    octave: i8,
}

impl Note {
    pub const SHARP: char = SHARP;
    pub const FLAT: char = FLAT;

    /// Create a note in octave 0
    pub fn new(name: NoteName, modifier: i8) -> Self {
        Self::with_octave(name, modifier, 0)
    }

    pub fn with_octave(name: NoteName, modifier: i8, octave: i8) -> Self {
        Self { name, modifier, octave }
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn modifier(&self) -> i8 {
        self.modifier
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Semitones above C, not normalized (Cb → -1, B# → 12)
    pub fn half_steps(&self) -> i32 {
        self.name.natural_offset() + self.modifier as i32
    }

    /// Pitch class 0-11, ignoring spelling and octave
    pub fn pitch_class(&self) -> u8 {
        pitch_class(self.half_steps())
    }

    /// Shift the accidental by `delta`, keeping letter and octave
    ///
    /// Used for chromatic alteration of a scale tone (a flatted seventh is
    /// the seventh degree with `modify(-1)`), so spelling is never re-derived.
    pub fn modify(&self, delta: i8) -> Note {
        Note {
            modifier: self.modifier + delta,
            ..*self
        }
    }

    /// Same pitch class, any spelling
    pub fn is_enharmonic_with(&self, other: &Note) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    /// Letter plus accidental, without the octave ("C#", "Bbb")
    pub fn spelling(&self) -> String {
        format!("{}{}", self.name, accidental_symbols(self.modifier))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling(), self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse `<Letter><Accidental><Octave>`, octave optional ("C#1", "Ab", "B-1")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let name = match s.chars().next() {
            Some(c) => NoteName::from_char(c).ok_or_else(|| TheoryError::InvalidNoteName(s.to_string()))?,
            None => return Err(TheoryError::InvalidNoteName(String::new())),
        };

        // Letter names are ASCII, so the accidental starts at byte 1
        let rest = &s[1..];
        let split = rest
            .find(|c: char| c == '-' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (accidental, octave) = rest.split_at(split);

        let modifier = parse_accidentals(accidental)
            .ok_or_else(|| TheoryError::InvalidAccidental(accidental.to_string()))?;

        let octave = if octave.is_empty() {
            0
        } else {
            octave
                .parse::<i8>()
                .map_err(|_| TheoryError::InvalidOctave(octave.to_string()))?
        };

        Ok(Note::with_octave(name, modifier, octave))
    }
}
