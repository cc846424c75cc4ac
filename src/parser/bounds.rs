//! Bound sets for the formatted-text loop
//!
//! A bound set holds the literals that stop the current formatted-text loop.
//! Each nesting level widens the set it was given and passes the new value down,
//! so an inner construct always stops at the nearest enclosing terminator and
//! can never consume one that belongs to an outer construct. The set is a
//! `Copy` value: widening never affects the caller's or a sibling's bounds.

use std::fmt;

/// A literal that can terminate formatted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    LineEnd,
    Star,
    Underscore,
    DoubleStar,
    DoubleUnderscore,
}

impl Bound {
    pub const ALL: [Bound; 5] = [
        Bound::LineEnd,
        Bound::Star,
        Bound::Underscore,
        Bound::DoubleStar,
        Bound::DoubleUnderscore,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            Bound::LineEnd => "\n",
            Bound::Star => "*",
            Bound::Underscore => "_",
            Bound::DoubleStar => "**",
            Bound::DoubleUnderscore => "__",
        }
    }

    fn from_literal(text: &str) -> Option<Self> {
        Bound::ALL.into_iter().find(|bound| bound.literal() == text)
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    bits: u8,
}

impl Bounds {
    /// The outermost set: formatted text runs to the end of the line
    pub fn line() -> Self {
        Self::default().with(Bound::LineEnd)
    }

    pub fn with(self, bound: Bound) -> Self {
        Self {
            bits: self.bits | bound.bit(),
        }
    }

    /// Bounds inside an italic span
    pub fn italic(self) -> Self {
        self.with(Bound::Star).with(Bound::Underscore)
    }

    /// Bounds inside a bold span
    pub fn bold(self) -> Self {
        self.with(Bound::DoubleStar).with(Bound::DoubleUnderscore)
    }

    pub fn contains(&self, text: &str) -> bool {
        Bound::from_literal(text).is_some_and(|bound| self.bits & bound.bit() != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Bound> + '_ {
        Bound::ALL
            .into_iter()
            .filter(|bound| self.bits & bound.bit() != 0)
    }
}

impl fmt::Debug for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(Bound::literal))
            .finish()
    }
}
