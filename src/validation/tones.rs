//! Chord-tone validators for a sounded set of notes
//!
//! The candidate is the list of notes a voicing sounds (one per played
//! string, any order, repeats allowed). Tones are compared by pitch class so
//! that an enharmonic spelling on the instrument still matches the chord.

use super::Validator;
use crate::chords::Chord;
use crate::models::Note;

/// Every sounded note belongs to the chord
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyChordTones;

impl Validator<[Note], Chord> for OnlyChordTones {
    fn validate(&self, candidate: &[Note], reference: &Chord) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let tones = reference.notes();
        candidate
            .iter()
            .all(|note| tones.iter().any(|tone| tone.is_enharmonic_with(note)))
    }
}

/// The chord root is sounded somewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct HasRoot;

impl Validator<[Note], Chord> for HasRoot {
    fn validate(&self, candidate: &[Note], reference: &Chord) -> bool {
        candidate.iter().any(|note| note.is_enharmonic_with(&reference.root))
    }
}

/// Every chord tone is sounded at least once
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteVoicing;

impl Validator<[Note], Chord> for CompleteVoicing {
    fn validate(&self, candidate: &[Note], reference: &Chord) -> bool {
        reference
            .notes()
            .iter()
            .all(|tone| candidate.iter().any(|note| note.is_enharmonic_with(tone)))
    }
}
