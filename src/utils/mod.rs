//! Utility modules
//!
//! Semitone arithmetic and accidental text helpers shared across the crate.

pub mod pitch_utils;
