/// Pitch class → spelling lookup
///
/// Format: pitch class (semitones above C, 0-11) → [sharp spelling, flat spelling]
///
/// Pitch classes with a natural spelling have exactly one entry:
///   0 → [C]
///   2 → [D]
/// Altered pitch classes have two, sharp first:
///   1 → [C#, Db]
///   6 → [F#, Gb]
///
/// The ordering is positional: `spell()` picks index 1 for flat-preferring
/// scales and index 0 otherwise.

use crate::models::note_name::NoteName::{self, A, B, C, D, E, F, G};
use crate::models::Note;

/// Letter and accidental modifier for one spelling of a pitch class
pub type Spelling = (NoteName, i8);

const CHROMATIC_SPELLINGS: [&[Spelling]; 12] = [
    &[(C, 0)],
    &[(C, 1), (D, -1)],
    &[(D, 0)],
    &[(D, 1), (E, -1)],
    &[(E, 0)],
    &[(F, 0)],
    &[(F, 1), (G, -1)],
    &[(G, 0)],
    &[(G, 1), (A, -1)],
    &[(A, 0)],
    &[(A, 1), (B, -1)],
    &[(B, 0)],
];

/// All canonical spellings of a pitch class, sharp-spelled first
///
/// # Panics
/// If `pitch_class` is not in 0-11.
pub fn spellings(pitch_class: u8) -> &'static [Spelling] {
    CHROMATIC_SPELLINGS[pitch_class as usize]
}

/// True for the five pitch classes that need an accidental (1, 3, 6, 8, 10)
pub fn is_ambiguous(pitch_class: u8) -> bool {
    spellings(pitch_class).len() > 1
}

/// Spell a pitch class as a note in the given octave
///
/// Flat-preferring spelling only changes the result for ambiguous pitch
/// classes; naturals have a single spelling either way.
pub fn spell(pitch_class: u8, prefer_flats: bool, octave: i8) -> Note {
    let candidates = spellings(pitch_class);
    let index = if prefer_flats && candidates.len() > 1 { 1 } else { 0 };
    let (name, modifier) = candidates[index];

    Note::with_octave(name, modifier, octave)
}
