//! Gene search related constants

use crate::domain::codon::Codon;
use crate::domain::nucleotide::Nucleotide;

// =============================================================================
// Decoding parameters
// =============================================================================

/// Number of nucleotides per codon
pub const CODON_LENGTH: usize = 3;

/// Number of distinct nucleotides (A, C, G, T)
pub const NUCLEOTIDE_COUNT: usize = 4;

// =============================================================================
// Example gene
// =============================================================================

/// Embedded example gene (57 symbols, decodes to 19 codons)
pub const DEFAULT_GENE: &str = "ACGTGGCTCTCTAACGTACGTACGTACGGGGTTTATATATACCCTAGGACTCCCTTT";

/// Environment variable that overrides the embedded gene
pub const GENE_ENV_VAR: &str = "GENE_SEARCH_GENE";

/// Example key present in `DEFAULT_GENE`
pub const DEFAULT_PRESENT_KEY: Codon = Codon::new(Nucleotide::A, Nucleotide::C, Nucleotide::G);

/// Example key absent from `DEFAULT_GENE`
pub const DEFAULT_ABSENT_KEY: Codon = Codon::new(Nucleotide::G, Nucleotide::G, Nucleotide::C);
