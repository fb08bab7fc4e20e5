//! Scale construction and interval application
//!
//! Scale construction runs in three stages, each producing a new note
//! sequence:
//! 1. `degree_walk()` - walk the step pattern from the root, spelling each
//!    pitch class from the chromatic table and carrying octaves
//! 2. `rotate()` - reorder degrees for the requested mode
//! 3. `fix_octaves()` - renumber octaves from the new first degree
//!
//! Stages 2 and 3 only run for rotated modes.

use serde::Serialize;
use std::fmt;

use super::pitch_class_table::spell;
use super::template::{Mode, ScaleTemplate};
use crate::errors::TheoryError;
use crate::models::{Interval, Note, NoteName};
use crate::utils::pitch_utils::{octave_carry, pitch_class, SEMITONES_PER_OCTAVE};

/// Generate the spelled notes for an arbitrary step pattern
///
/// Callers must supply steps summing to 12 and `rotation < steps.len()`.
/// Neither is enforced; a pattern of the wrong size is logged and built anyway.
///
/// # Panics
/// If `rotation > steps.len()`.
pub fn generate(root: Note, steps: &[i32], rotation: usize) -> Vec<Note> {
    let span: i32 = steps.iter().sum();
    if span != SEMITONES_PER_OCTAVE {
        log::warn!("Step pattern {:?} spans {} semitones, expected {}", steps, span, SEMITONES_PER_OCTAVE);
    }

    let degrees = degree_walk(root, steps);

    if rotation > 0 {
        fix_octaves(&rotate(&degrees, rotation))
    } else {
        degrees
    }
}

/// Spell one note per step, starting at the root's absolute semitone position
///
/// A flat root (modifier < 0) spells every ambiguous degree with its flat
/// alternative; all other roots take the sharp/natural spelling. This does not
/// reproduce key signature spelling: F# major comes out with A# and B, and
/// Gb major with B natural instead of Cb.
fn degree_walk(root: Note, steps: &[i32]) -> Vec<Note> {
    let prefer_flats = root.modifier() < 0;
    let mut semitones = root.half_steps();

    steps
        .iter()
        .map(|step| {
            let note = spell(pitch_class(semitones), prefer_flats, octave_carry(semitones) as i8);
            semitones += step;
            note
        })
        .collect()
}

/// Rotate left: `[rotation..]` becomes the prefix, `[..rotation]` the suffix
fn rotate(notes: &[Note], rotation: usize) -> Vec<Note> {
    notes[rotation..].iter().chain(&notes[..rotation]).copied().collect()
}

/// Renumber octaves from 0, incrementing whenever the letter returns to C
///
/// Octaves from the degree walk are relative to the root's position before
/// rotation, so a rotated sequence has to be renumbered from its new start.
fn fix_octaves(notes: &[Note]) -> Vec<Note> {
    let mut octave = 0;

    notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            if i > 0 && note.name() == NoteName::C {
                octave += 1;
            }
            Note::with_octave(note.name(), note.modifier(), octave)
        })
        .collect()
}

/// The spelled notes of one scale, in degree order
///
/// Built once from a root, a template and a mode; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    root: Note,
    template: ScaleTemplate,
    mode: Mode,
    notes: Vec<Note>,
}

impl Scale {
    pub fn new(root: Note, template: ScaleTemplate, mode: Mode) -> Self {
        let notes = generate(root, template.steps(), mode.transposition());

        let scale = Self {
            root,
            template,
            mode,
            notes,
        };
        log::debug!("Built {} {} scale on {}: {}", scale.template, scale.mode, root, scale);

        scale
    }

    pub fn major(root: Note) -> Self {
        Self::new(root, ScaleTemplate::Major, Mode::Ionian)
    }

    pub fn major_in(root: Note, mode: Mode) -> Self {
        Self::new(root, ScaleTemplate::Major, mode)
    }

    pub fn minor(root: Note) -> Self {
        Self::new(root, ScaleTemplate::Minor, Mode::Ionian)
    }

    pub fn minor_in(root: Note, mode: Mode) -> Self {
        Self::new(root, ScaleTemplate::Minor, mode)
    }

    pub fn harmonic_minor(root: Note) -> Self {
        Self::new(root, ScaleTemplate::HarmonicMinor, Mode::Ionian)
    }

    pub fn harmonic_minor_in(root: Note, mode: Mode) -> Self {
        Self::new(root, ScaleTemplate::HarmonicMinor, mode)
    }

    /// The major scale of `root` rotated to Aeolian
    pub fn relative_minor(root: Note) -> Self {
        Self::new(root, ScaleTemplate::Major, Mode::Aeolian)
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn template(&self) -> ScaleTemplate {
        self.template
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// The note at a 1-based degree
    ///
    /// # Panics
    /// If `degree` is outside `1..=len()`.
    pub fn note(&self, degree: usize) -> Note {
        self.checked_note(degree).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The note at a 1-based degree, or `DegreeOutOfRange`
    pub fn checked_note(&self, degree: usize) -> Result<Note, TheoryError> {
        degree
            .checked_sub(1)
            .and_then(|index| self.notes.get(index))
            .copied()
            .ok_or(TheoryError::DegreeOutOfRange {
                degree,
                len: self.notes.len(),
            })
    }

    /// Locate the interval's degree, then alter it by the interval's modifier
    ///
    /// The octave is inherited from the located degree.
    ///
    /// # Panics
    /// If the interval's degree is outside `1..=len()`.
    pub fn apply_interval(&self, interval: Interval) -> Note {
        self.note(interval.degree).modify(interval.modifier)
    }

    /// Apply each interval independently, preserving input order
    pub fn apply_intervals(&self, intervals: &[Interval]) -> Vec<Note> {
        intervals.iter().map(|&interval| self.apply_interval(interval)).collect()
    }

    /// Owned copy of the notes
    pub fn scale_notes(&self) -> Vec<Note> {
        self.notes.clone()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.notes.iter().map(|note| note.to_string()).collect();
        write!(f, "{}", rendered.join(", "))
    }
}
