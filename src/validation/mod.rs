//! Validation of candidate voicings against a reference chord
//!
//! A validator answers one yes/no question about a candidate. Validators
//! compose through `DisjunctiveValidator`, which accepts a candidate when any
//! of its active members does.

pub mod disjunctive;
pub mod tones;

pub use disjunctive::DisjunctiveValidator;
pub use tones::{CompleteVoicing, HasRoot, OnlyChordTones};

/// Accept or reject a candidate against a reference
pub trait Validator<C: ?Sized, R: ?Sized> {
    fn validate(&self, candidate: &C, reference: &R) -> bool;
}

impl<C: ?Sized, R: ?Sized, F> Validator<C, R> for F
where
    F: Fn(&C, &R) -> bool,
{
    fn validate(&self, candidate: &C, reference: &R) -> bool {
        self(candidate, reference)
    }
}
