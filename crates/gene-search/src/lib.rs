//! gene-search - Codon decoding and membership search over DNA genes
//!
//! This crate provides functionality to:
//! - Decode a nucleotide string into a gene (sequence of codons)
//! - Search a gene for a codon by linear scan or by binary search on a sorted view
//! - Run and verify example search workflows with expected outcomes

pub mod constants;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use app::searcher::{
    Query, QueryOutcome, SearchConfig, SearchError, SearchReport, run_search, verify_report,
};
pub use constants::*;
pub use domain::codon::{Codon, CodonParseError};
pub use domain::gene::{DecodeError, Gene, SortedGene, decode};
pub use domain::nucleotide::{InvalidNucleotide, Nucleotide};
pub use domain::search::{SearchStrategy, binary_contains, linear_contains};
