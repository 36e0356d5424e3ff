//! Codon type
//!
//! A codon is an ordered triple of nucleotides. Equality and ordering are
//! lexicographic over the three positions.

use crate::constants::CODON_LENGTH;
use crate::domain::nucleotide::{InvalidNucleotide, Nucleotide};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codon([Nucleotide; CODON_LENGTH]);

/// Errors when parsing a codon from text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodonParseError {
    #[error("codon must have exactly {expected} symbols, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error(transparent)]
    InvalidSymbol(#[from] InvalidNucleotide),
}

impl Codon {
    pub const fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Self([first, second, third])
    }

    pub const fn from_nucleotides(nucleotides: [Nucleotide; CODON_LENGTH]) -> Self {
        Self(nucleotides)
    }

    pub const fn nucleotides(&self) -> [Nucleotide; CODON_LENGTH] {
        self.0
    }
}

impl FromStr for Codon {
    type Err = CodonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != CODON_LENGTH {
            return Err(CodonParseError::InvalidLength {
                expected: CODON_LENGTH,
                found,
            });
        }

        let mut nucleotides = [Nucleotide::A; CODON_LENGTH];
        for (slot, symbol) in nucleotides.iter_mut().zip(s.chars()) {
            *slot = Nucleotide::try_from(symbol)?;
        }
        Ok(Self(nucleotides))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nuc in self.0 {
            write!(f, "{}", nuc)?;
        }
        Ok(())
    }
}
