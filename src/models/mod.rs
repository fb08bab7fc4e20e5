//! Models module
//!
//! Immutable value types shared by scale construction, chord spelling
//! and fingering validation.

pub mod interval;
pub mod note;
pub mod note_name;

// Re-export commonly used types
pub use interval::Interval;
pub use note::Note;
pub use note_name::NoteName;
