//! Shared pitch utility functions
//!
//! Semitone arithmetic and accidental text handling used by the note model,
//! the pitch class table and scale construction.

/// Number of semitones in one chromatic cycle
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Symbol rendered once per unit of sharpward modifier
pub const SHARP: char = '#';

/// Symbol rendered once per unit of flatward modifier
pub const FLAT: char = 'b';

/// Reduce an absolute semitone position to its pitch class (0-11)
///
/// Uses floor-mod, so negative positions wrap upward: -1 → 11.
pub fn pitch_class(semitones: i32) -> u8 {
    semitones.rem_euclid(SEMITONES_PER_OCTAVE) as u8
}

/// Octave carry for an absolute semitone position
///
/// Uses floor-div, so -1 → -1 and 12 → 1.
pub fn octave_carry(semitones: i32) -> i32 {
    semitones.div_euclid(SEMITONES_PER_OCTAVE)
}

/// Get accidental symbols for a modifier
///
/// One symbol per unit of magnitude: -2 → "bb", 1 → "#", 0 → "".
pub fn accidental_symbols(modifier: i8) -> String {
    if modifier > 0 {
        SHARP.to_string().repeat(modifier as usize)
    } else if modifier < 0 {
        FLAT.to_string().repeat(modifier.unsigned_abs() as usize)
    } else {
        String::new()
    }
}

/// Parse accidental symbols into a modifier
///
/// Accepts an empty string, a run of sharps or a run of flats.
/// Mixed runs ("#b") are rejected.
pub fn parse_accidentals(symbols: &str) -> Option<i8> {
    if symbols.is_empty() {
        return Some(0);
    }

    let count = i8::try_from(symbols.chars().count()).ok()?;

    if symbols.chars().all(|c| c == SHARP || c == '♯') {
        Some(count)
    } else if symbols.chars().all(|c| c == FLAT || c == '♭') {
        Some(-count)
    } else {
        None
    }
}
