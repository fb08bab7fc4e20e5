// Scale construction scenarios
//
// Literal renderings for known scales and modes, plus interval
// application against generated scales.

use conchordance::models::NoteName::*;
use conchordance::{Interval, Mode, Note, Scale};

fn major(name: conchordance::NoteName, modifier: i8, mode: Mode) -> String {
    Scale::major_in(Note::new(name, modifier), mode).to_string()
}

#[test]
fn test_a_major_scale() {
    assert_eq!(
        Scale::major(Note::new(A, 0)).to_string(),
        format!("A0, B0, C{0}1, D1, E1, F{0}1, G{0}1", Note::SHARP)
    );
}

#[test]
fn test_a_major_scale_all_modes() {
    let expected = [
        (Mode::Ionian, "A0, B0, C#1, D1, E1, F#1, G#1"),
        (Mode::Dorian, "B0, C#1, D1, E1, F#1, G#1, A1"),
        (Mode::Phrygian, "C#0, D0, E0, F#0, G#0, A0, B0"),
        (Mode::Lydian, "D0, E0, F#0, G#0, A0, B0, C#1"),
        (Mode::Mixolydian, "E0, F#0, G#0, A0, B0, C#1, D1"),
        (Mode::Aeolian, "F#0, G#0, A0, B0, C#1, D1, E1"),
        (Mode::Locrian, "G#0, A0, B0, C#1, D1, E1, F#1"),
    ];

    for (mode, rendered) in expected {
        assert_eq!(major(A, 0, mode), rendered, "A major, {} mode", mode);
    }
}

#[test]
fn test_c_major_scale() {
    assert_eq!(major(C, 0, Mode::Ionian), "C0, D0, E0, F0, G0, A0, B0");
}

#[test]
fn test_a_sharp_major_scale() {
    assert_eq!(major(A, 1, Mode::Ionian), "A#0, C1, D1, D#1, F1, G1, A1");
}

#[test]
fn test_a_flat_major_scale() {
    assert_eq!(
        major(A, -1, Mode::Ionian),
        format!("A{0}0, B{0}0, C1, D{0}1, E{0}1, F1, G1", Note::FLAT)
    );
}

#[test]
fn test_b_major_scale() {
    assert_eq!(major(B, 0, Mode::Ionian), "B0, C#1, D#1, E1, F#1, G#1, A#1");
}

#[test]
fn test_c_minor_scale() {
    assert_eq!(
        Scale::minor(Note::new(C, 0)).to_string(),
        "C0, D0, D#0, F0, G0, G#0, A#0"
    );
}

#[test]
fn test_a_harmonic_minor_scale() {
    assert_eq!(
        Scale::harmonic_minor(Note::new(A, 0)).to_string(),
        "A0, B0, C1, D1, E1, F1, G#1"
    );
}

#[test]
fn test_relative_minor_of_c() {
    let scale = Scale::relative_minor(Note::new(C, 0));
    assert_eq!(scale.mode(), Mode::Aeolian);
    assert_eq!(scale.to_string(), "A0, B0, C1, D1, E1, F1, G1");
}

#[test]
fn test_flat_root_uses_flats_in_rotated_mode() {
    // Pitch class 11 has only the B spelling, so Eb minor gets B rather than Cb
    assert_eq!(
        Scale::minor(Note::new(E, -1)).to_string(),
        "Eb0, F0, Gb0, Ab0, Bb0, B0, Db1"
    );
    assert_eq!(
        Scale::minor_in(Note::new(E, -1), Mode::Dorian).to_string(),
        "F0, Gb0, Ab0, Bb0, B0, Db0, Eb0"
    );
}

#[test]
fn test_apply_intervals() {
    let c_scale = Scale::major(Note::new(C, 0));
    let c_major = c_scale.apply_intervals(&[Interval::UNISON, Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH]);
    assert_eq!(c_major, vec![Note::new(C, 0), Note::new(E, 0), Note::new(G, 0)]);
}

#[test]
fn test_apply_intervals_keeps_input_order_and_repeats() {
    let c_scale = Scale::major(Note::new(C, 0));
    let notes = c_scale.apply_intervals(&[Interval::PERFECT_FIFTH, Interval::UNISON, Interval::PERFECT_FIFTH]);
    assert_eq!(notes, vec![Note::new(G, 0), Note::new(C, 0), Note::new(G, 0)]);
}

#[test]
fn test_octaves() {
    let a_scale = Scale::major(Note::new(A, 0));
    assert_eq!(a_scale.note(3), Note::with_octave(C, 1, 1), "Octave rolls over at C");
    assert_eq!(a_scale.apply_interval(Interval::PERFECT_FIFTH), Note::with_octave(E, 0, 1));
}

#[test]
fn test_apply_interval() {
    let c_scale = Scale::major(Note::new(C, 0));

    assert_eq!(c_scale.apply_interval(Interval::PERFECT_FIFTH), Note::new(G, 0));
    assert_eq!(
        c_scale.apply_interval(Interval::new(7, -2)),
        Note::new(B, -2),
        "Double-flat seventh of C major is Bbb"
    );
}

#[test]
fn test_altered_tone_inherits_octave() {
    let a_scale = Scale::major(Note::new(A, 0));
    assert_eq!(a_scale.apply_interval(Interval::MINOR_THIRD), Note::with_octave(C, 0, 1));
}
