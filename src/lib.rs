//! Conchordance music theory core
//!
//! Pitches, intervals, scales and modes for fretted-instrument fingering
//! tools. Scale construction spells every degree from a chromatic table,
//! rotates for the requested mode and renumbers octaves; chord tones are
//! pulled out of a scale through intervals.

pub mod api;
pub mod chords;
pub mod errors;
pub mod models;
pub mod scales;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use chords::{Chord, ChordType};
pub use errors::TheoryError;
pub use models::{Interval, Note, NoteName};
pub use scales::{Mode, Scale, ScaleTemplate};
pub use validation::{DisjunctiveValidator, Validator};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second start (hot reload) finds the logger already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Conchordance WASM module initialized");
}
