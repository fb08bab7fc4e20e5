//! WASM API tests
//!
//! Exercises the JavaScript-facing functions. Only built for wasm32; run with
//! `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use conchordance::api::{chord_notes, render_scale, scale_notes};
use conchordance::Note;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_render_scale() {
    let rendered = render_scale("A", "major", "dorian").unwrap();
    assert_eq!(rendered, "B0, C#1, D1, E1, F#1, G#1, A1");
}

#[wasm_bindgen_test]
fn test_render_scale_rejects_unknown_template() {
    let err = render_scale("A", "blues", "").unwrap_err();
    assert!(err.as_string().unwrap().contains("blues"));
}

#[wasm_bindgen_test]
fn test_scale_notes_roundtrip() {
    let value = scale_notes("Ab", "major", "").unwrap();
    let notes: Vec<Note> = serde_wasm_bindgen::from_value(value).unwrap();
    let rendered: Vec<String> = notes.iter().map(|n| n.to_string()).collect();
    assert_eq!(rendered, vec!["Ab0", "Bb0", "C1", "Db1", "Eb1", "F1", "G1"]);
}

#[wasm_bindgen_test]
fn test_chord_notes() {
    let value = chord_notes("Cm7").unwrap();
    let notes: Vec<Note> = serde_wasm_bindgen::from_value(value).unwrap();
    let spelled: Vec<String> = notes.iter().map(|n| n.spelling()).collect();
    assert_eq!(spelled, vec!["C", "Eb", "G", "Bb"]);
}
