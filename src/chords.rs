//! Chord definitions
//!
//! A chord is a root plus a quality. Each tone is spelled from the root by
//! letter distance along the major step pattern, then altered by the
//! interval's modifier. The root keeps its own spelling and octave, so Cb
//! stays Cb and C minor gets Eb, not D#.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TheoryError;
use crate::models::{Interval, Note, NoteName};
use crate::scales::ScaleTemplate;
use crate::utils::pitch_utils::parse_accidentals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Suspended2,
    Suspended4,
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
    Diminished7,
}

impl ChordType {
    pub const ALL: [ChordType; 11] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Suspended2,
        ChordType::Suspended4,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::HalfDiminished7,
        ChordType::Diminished7,
    ];

    /// Chord tones as intervals over the root's major scale, root first
    pub fn intervals(&self) -> &'static [Interval] {
        use Interval as I;

        match self {
            ChordType::Major => &[I::UNISON, I::MAJOR_THIRD, I::PERFECT_FIFTH],
            ChordType::Minor => &[I::UNISON, I::MINOR_THIRD, I::PERFECT_FIFTH],
            ChordType::Diminished => &[I::UNISON, I::MINOR_THIRD, I::DIMINISHED_FIFTH],
            ChordType::Augmented => &[I::UNISON, I::MAJOR_THIRD, I::AUGMENTED_FIFTH],
            ChordType::Suspended2 => &[I::UNISON, I::MAJOR_SECOND, I::PERFECT_FIFTH],
            ChordType::Suspended4 => &[I::UNISON, I::PERFECT_FOURTH, I::PERFECT_FIFTH],
            ChordType::Dominant7 => &[I::UNISON, I::MAJOR_THIRD, I::PERFECT_FIFTH, I::MINOR_SEVENTH],
            ChordType::Major7 => &[I::UNISON, I::MAJOR_THIRD, I::PERFECT_FIFTH, I::MAJOR_SEVENTH],
            ChordType::Minor7 => &[I::UNISON, I::MINOR_THIRD, I::PERFECT_FIFTH, I::MINOR_SEVENTH],
            ChordType::HalfDiminished7 => &[I::UNISON, I::MINOR_THIRD, I::DIMINISHED_FIFTH, I::MINOR_SEVENTH],
            ChordType::Diminished7 => &[I::UNISON, I::MINOR_THIRD, I::DIMINISHED_FIFTH, I::DIMINISHED_SEVENTH],
        }
    }

    /// Suffix written after the root in a chord symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Suspended2 => "sus2",
            ChordType::Suspended4 => "sus4",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::Diminished7 => "dim7",
        }
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "maj" | "M" => Ok(ChordType::Major),
            "m" | "min" | "-" => Ok(ChordType::Minor),
            "dim" | "°" => Ok(ChordType::Diminished),
            "aug" | "+" => Ok(ChordType::Augmented),
            "sus2" => Ok(ChordType::Suspended2),
            "sus4" | "sus" => Ok(ChordType::Suspended4),
            "7" => Ok(ChordType::Dominant7),
            "maj7" | "M7" => Ok(ChordType::Major7),
            "m7" | "min7" | "-7" => Ok(ChordType::Minor7),
            "m7b5" | "ø" => Ok(ChordType::HalfDiminished7),
            "dim7" | "°7" => Ok(ChordType::Diminished7),
            _ => Err(TheoryError::UnknownChord(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub chord_type: ChordType,
}

impl Chord {
    pub fn new(root: Note, chord_type: ChordType) -> Self {
        Self { root, chord_type }
    }

    /// Spelled chord tones in interval order
    pub fn notes(&self) -> Vec<Note> {
        let notes: Vec<Note> = self.chord_type.intervals().iter().map(|&interval| self.tone(interval)).collect();
        log::debug!("Spelled {} as {:?}", self, notes.iter().map(|n| n.spelling()).collect::<Vec<_>>());
        notes
    }

    /// Spell one interval above the root
    ///
    /// The letter is `degree - 1` letters above the root's letter; the
    /// accidental is whatever makes up the major-scale distance plus the
    /// interval's modifier. Octaves advance each time the letter passes B.
    pub fn tone(&self, interval: Interval) -> Note {
        let degree_index = interval.degree.saturating_sub(1);
        let span: i32 = ScaleTemplate::Major.steps().iter().cycle().take(degree_index).sum();

        let letter_index = self.root.name().index() + degree_index;
        let name = NoteName::ALL[letter_index % NoteName::ALL.len()];
        let octaves_up = (letter_index / NoteName::ALL.len()) as i32;

        let target = self.root.half_steps() + span + interval.modifier as i32;
        let modifier = target - (name.natural_offset() + 12 * octaves_up);

        Note::with_octave(name, modifier as i8, self.root.octave() + octaves_up as i8)
    }

    /// True if some chord tone has the same letter and accidental, any octave
    pub fn contains(&self, note: &Note) -> bool {
        self.notes()
            .iter()
            .any(|tone| tone.name() == note.name() && tone.modifier() == note.modifier())
    }

    /// True if some chord tone sounds the given pitch class, any spelling
    pub fn contains_pitch_class(&self, pitch_class: u8) -> bool {
        self.notes().iter().any(|tone| tone.pitch_class() == pitch_class)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.spelling(), self.chord_type.symbol())
    }
}

impl FromStr for Chord {
    type Err = TheoryError;

    /// Parse a chord symbol such as "C", "F#m7" or "Bbdim7"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let name = s
            .chars()
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(|| TheoryError::InvalidNoteName(s.to_string()))?;

        let rest = &s[1..];
        let split = rest
            .find(|c: char| !matches!(c, '#' | 'b' | '♯' | '♭'))
            .unwrap_or(rest.len());
        let (accidental, symbol) = rest.split_at(split);

        let modifier = parse_accidentals(accidental)
            .ok_or_else(|| TheoryError::InvalidAccidental(accidental.to_string()))?;

        Ok(Chord::new(Note::new(name, modifier), symbol.parse()?))
    }
}
