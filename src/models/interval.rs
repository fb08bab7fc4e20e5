/// A scale degree plus a chromatic adjustment
///
/// `Interval::new(3, -1)` reads as "the third degree, lowered a semitone".
/// Applied against a major scale this yields the minor third. The named
/// constants are conveniences for the common chord tones.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::pitch_utils::accidental_symbols;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// 1-based scale degree
    pub degree: usize,

    /// Accidental shift applied after the degree is located
    pub modifier: i8,
}

impl Interval {
    pub const UNISON: Interval = Interval::new(1, 0);
    pub const MINOR_SECOND: Interval = Interval::new(2, -1);
    pub const MAJOR_SECOND: Interval = Interval::new(2, 0);
    pub const MINOR_THIRD: Interval = Interval::new(3, -1);
    pub const MAJOR_THIRD: Interval = Interval::new(3, 0);
    pub const PERFECT_FOURTH: Interval = Interval::new(4, 0);
    pub const AUGMENTED_FOURTH: Interval = Interval::new(4, 1);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(5, -1);
    pub const PERFECT_FIFTH: Interval = Interval::new(5, 0);
    pub const AUGMENTED_FIFTH: Interval = Interval::new(5, 1);
    pub const MINOR_SIXTH: Interval = Interval::new(6, -1);
    pub const MAJOR_SIXTH: Interval = Interval::new(6, 0);
    pub const DIMINISHED_SEVENTH: Interval = Interval::new(7, -2);
    pub const MINOR_SEVENTH: Interval = Interval::new(7, -1);
    pub const MAJOR_SEVENTH: Interval = Interval::new(7, 0);

    pub const fn new(degree: usize, modifier: i8) -> Self {
        Self { degree, modifier }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", accidental_symbols(self.modifier), self.degree)
    }
}
