//! Scale templates and modes
//!
//! A template is the step pattern of a scale family. A mode is a rotation
//! of the generated degree order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TheoryError;

/// Step pattern (semitones between consecutive degrees) of a scale family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleTemplate {
    Major,
    Minor,
    HarmonicMinor,
}

impl ScaleTemplate {
    pub const ALL: [ScaleTemplate; 3] = [
        ScaleTemplate::Major,
        ScaleTemplate::Minor,
        ScaleTemplate::HarmonicMinor,
    ];

    /// Semitone steps between consecutive degrees; each pattern sums to 12
    pub fn steps(&self) -> &'static [i32] {
        match self {
            ScaleTemplate::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleTemplate::Minor => &[2, 1, 2, 2, 1, 2, 2],
            ScaleTemplate::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
        }
    }

    /// Number of degrees the template produces
    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps().is_empty()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleTemplate::Major => "major",
            ScaleTemplate::Minor => "minor",
            ScaleTemplate::HarmonicMinor => "harmonic-minor",
        }
    }
}

impl fmt::Display for ScaleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScaleTemplate {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', ' '], "-").as_str() {
            "major" => Ok(ScaleTemplate::Major),
            "minor" | "natural-minor" => Ok(ScaleTemplate::Minor),
            "harmonic-minor" => Ok(ScaleTemplate::HarmonicMinor),
            _ => Err(TheoryError::UnknownTemplate(s.to_string())),
        }
    }
}

/// Rotation of a generated scale, Ionian (no rotation) through Locrian
///
/// Serialized as its rotation offset.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Mode {
    #[default]
    Ionian = 0,
    Dorian = 1,
    Phrygian = 2,
    Lydian = 3,
    Mixolydian = 4,
    Aeolian = 5,
    Locrian = 6,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Number of positions the degree sequence is rotated left
    pub fn transposition(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheoryError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_cover_one_octave() {
        for template in ScaleTemplate::ALL {
            assert_eq!(template.steps().iter().sum::<i32>(), 12, "{}", template);
            assert_eq!(template.len(), 7);
            assert!(!template.is_empty());
        }
    }

    #[test]
    fn test_mode_defaults_to_ionian() {
        assert_eq!(Mode::default(), Mode::Ionian);
        assert_eq!(Mode::default().transposition(), 0);
    }

    #[test]
    fn test_mode_transpositions() {
        let offsets: Vec<usize> = Mode::ALL.iter().map(|m| m.transposition()).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_template_from_str() {
        assert_eq!("major".parse::<ScaleTemplate>().unwrap(), ScaleTemplate::Major);
        assert_eq!("Harmonic Minor".parse::<ScaleTemplate>().unwrap(), ScaleTemplate::HarmonicMinor);
        assert_eq!("harmonic_minor".parse::<ScaleTemplate>().unwrap(), ScaleTemplate::HarmonicMinor);
        assert!("blues".parse::<ScaleTemplate>().is_err());
    }

    #[test]
    fn test_mode_from_str_case_insensitive() {
        assert_eq!("Dorian".parse::<Mode>().unwrap(), Mode::Dorian);
        assert_eq!("LOCRIAN".parse::<Mode>().unwrap(), Mode::Locrian);
        assert_eq!(
            "hypodorian".parse::<Mode>(),
            Err(TheoryError::UnknownMode("hypodorian".to_string()))
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        assert_eq!(serde_json::to_string(&Mode::Aeolian).unwrap(), "5");
        assert_eq!(serde_json::from_str::<Mode>("1").unwrap(), Mode::Dorian);
        assert_eq!(
            serde_json::to_string(&ScaleTemplate::HarmonicMinor).unwrap(),
            "\"harmonic-minor\""
        );
    }
}
