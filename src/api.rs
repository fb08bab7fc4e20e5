//! WASM API for scale and chord construction
//!
//! Inputs arrive as strings from JavaScript and are parsed with the
//! `FromStr` impls of the model types. Parse failures come back as rejected
//! promises / thrown strings carrying the `TheoryError` message.

use wasm_bindgen::prelude::*;

use crate::chords::Chord;
use crate::errors::TheoryError;
use crate::models::Note;
use crate::scales::{Mode, Scale, ScaleTemplate};

fn to_js_error(err: TheoryError) -> JsValue {
    log::warn!("Rejected request: {}", err);
    JsValue::from_str(&err.to_string())
}

/// Parse the three scale inputs and build the scale
///
/// An empty mode string selects Ionian.
pub fn build_scale(root: &str, template: &str, mode: &str) -> Result<Scale, TheoryError> {
    let root: Note = root.parse()?;
    let template: ScaleTemplate = template.parse()?;
    let mode = if mode.trim().is_empty() {
        Mode::default()
    } else {
        mode.parse()?
    };

    Ok(Scale::new(root, template, mode))
}

/// Notes of a scale as an array of `{ name, modifier, octave }`
///
/// # Example (JS)
/// ```text
/// scaleNotes("A", "major", "dorian")
/// // [{ name: "B", modifier: 0, octave: 0 }, { name: "C", modifier: 1, octave: 1 }, ...]
/// ```
#[wasm_bindgen(js_name = scaleNotes)]
pub fn scale_notes(root: &str, template: &str, mode: &str) -> Result<JsValue, JsValue> {
    let scale = build_scale(root, template, mode).map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&scale.scale_notes())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Canonical rendering of a scale, e.g. "A0, B0, C#1, D1, E1, F#1, G#1"
#[wasm_bindgen(js_name = renderScale)]
pub fn render_scale(root: &str, template: &str, mode: &str) -> Result<String, JsValue> {
    build_scale(root, template, mode)
        .map(|scale| scale.to_string())
        .map_err(to_js_error)
}

/// Spelled tones of a chord symbol such as "C#m7"
#[wasm_bindgen(js_name = chordNotes)]
pub fn chord_notes(symbol: &str) -> Result<JsValue, JsValue> {
    let chord: Chord = symbol.parse().map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&chord.notes())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
