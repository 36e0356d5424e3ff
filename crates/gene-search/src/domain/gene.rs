//! Gene decoding
//!
//! A gene is an ordered sequence of codons decoded from a flat nucleotide
//! string. Decoding reads consecutive non-overlapping windows of
//! `CODON_LENGTH` symbols from offset 0; a trailing window shorter than
//! `CODON_LENGTH` is dropped without being inspected.

use crate::constants::CODON_LENGTH;
use crate::domain::codon::Codon;
use crate::domain::nucleotide::Nucleotide;
use crate::domain::search::{binary_contains, linear_contains};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Gene decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Symbol outside {A, C, G, T}; `position` is the character offset
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Ordered sequence of codons, in decoding order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gene {
    codons: Vec<Codon>,
}

/// Ascending-sorted copy of a gene's codons
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedGene {
    codons: Vec<Codon>,
}

/// Decode a nucleotide string into a gene
///
/// Shorthand for [`Gene::decode`].
pub fn decode(input: &str) -> Result<Gene, DecodeError> {
    Gene::decode(input)
}

impl Gene {
    /// Decode a nucleotide string into a gene
    ///
    /// The result holds `n / CODON_LENGTH` codons where `n` is the number of
    /// characters in `input`. Fails on the first invalid symbol in a complete
    /// window; no partial gene is returned.
    pub fn decode(input: &str) -> Result<Self, DecodeError> {
        let symbols: Vec<char> = input.chars().collect();

        let codons = symbols
            .chunks_exact(CODON_LENGTH)
            .enumerate()
            .map(|(index, window)| decode_window(window, index * CODON_LENGTH))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            symbols = symbols.len(),
            codons = codons.len(),
            dropped = symbols.len() % CODON_LENGTH,
            "decoded gene"
        );

        Ok(Self { codons })
    }

    pub fn from_codons(codons: Vec<Codon>) -> Self {
        Self { codons }
    }

    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Codon> {
        self.codons.iter()
    }

    /// Linear scan for `key`
    pub fn contains(&self, key: &Codon) -> bool {
        linear_contains(&self.codons, key)
    }

    /// Produce a sorted view; this gene is left untouched
    pub fn sorted(&self) -> SortedGene {
        SortedGene::from_codons(self.codons.clone())
    }
}

impl SortedGene {
    /// Sort `codons` ascending
    pub fn from_codons(mut codons: Vec<Codon>) -> Self {
        codons.sort_unstable();
        debug!(codons = codons.len(), "sorted gene");
        Self { codons }
    }

    pub fn as_slice(&self) -> &[Codon] {
        &self.codons
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    /// Binary search for `key`
    pub fn contains(&self, key: &Codon) -> bool {
        binary_contains(&self.codons, key)
    }
}

impl FromStr for Gene {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl<'a> IntoIterator for &'a Gene {
    type Item = &'a Codon;
    type IntoIter = std::slice::Iter<'a, Codon>;

    fn into_iter(self) -> Self::IntoIter {
        self.codons.iter()
    }
}

fn decode_window(window: &[char], offset: usize) -> Result<Codon, DecodeError> {
    let mut nucleotides = [Nucleotide::A; CODON_LENGTH];
    for (i, (slot, &symbol)) in nucleotides.iter_mut().zip(window).enumerate() {
        *slot = Nucleotide::from_char(symbol).ok_or(DecodeError::InvalidSymbol {
            symbol,
            position: offset + i,
        })?;
    }
    Ok(Codon::from_nucleotides(nucleotides))
}
