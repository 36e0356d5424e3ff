//! Nucleotide alphabet
//!
//! The four DNA bases with a stable index mapping (A=0, C=1, G=2, T=3).
//! Ordering is by index, which gives codons their lexicographic order.

use crate::constants::NUCLEOTIDE_COUNT;
use std::fmt;
use thiserror::Error;

/// A DNA nucleotide base
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

/// Error returned when a character is not one of `A`, `C`, `G`, `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid nucleotide symbol '{0}'")]
pub struct InvalidNucleotide(pub char);

impl Nucleotide {
    /// All nucleotides in ascending order
    pub const ALL: [Nucleotide; NUCLEOTIDE_COUNT] = [Self::A, Self::C, Self::G, Self::T];

    /// Convert from index (0-3)
    #[inline]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an uppercase ASCII byte.
    ///
    /// Lowercase bases are rejected: symbols are matched by name exactly.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_char(symbol: char) -> Option<Self> {
        if symbol.is_ascii() {
            Self::from_ascii(symbol as u8)
        } else {
            None
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_char(symbol).ok_or(InvalidNucleotide(symbol))
    }
}

impl From<Nucleotide> for char {
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
