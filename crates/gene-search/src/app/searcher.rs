//! Search workflow implementation
//!
//! This module decodes a gene, runs every query with both search strategies
//! (linear on the gene, binary on its sorted view) and verifies the outcomes.

use crate::constants::{DEFAULT_ABSENT_KEY, DEFAULT_GENE, DEFAULT_PRESENT_KEY};
use crate::domain::codon::Codon;
use crate::domain::gene::{DecodeError, Gene};
use crate::domain::search::SearchStrategy;
use thiserror::Error;
use tracing::{debug, info};

/// A codon to look up, with an optional expected outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub key: Codon,
    /// Expected membership (None = report only)
    pub expected: Option<bool>,
}

impl Query {
    pub fn new(key: Codon) -> Self {
        Self {
            key,
            expected: None,
        }
    }

    pub fn expecting(key: Codon, found: bool) -> Self {
        Self {
            key,
            expected: Some(found),
        }
    }
}

/// Input for a search run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nucleotide string to decode
    pub gene: String,
    pub queries: Vec<Query>,
}

impl SearchConfig {
    pub fn new(gene: impl Into<String>, queries: Vec<Query>) -> Self {
        Self {
            gene: gene.into(),
            queries,
        }
    }

    /// Embedded gene with the two example keys and their expected outcomes
    pub fn default_example() -> Self {
        Self::new(
            DEFAULT_GENE,
            vec![
                Query::expecting(DEFAULT_PRESENT_KEY, true),
                Query::expecting(DEFAULT_ABSENT_KEY, false),
            ],
        )
    }

    /// Custom gene with the two example keys, report only
    pub fn with_default_keys(gene: impl Into<String>) -> Self {
        Self::new(
            gene,
            vec![
                Query::new(DEFAULT_PRESENT_KEY),
                Query::new(DEFAULT_ABSENT_KEY),
            ],
        )
    }

    /// Resolve the run config from command-line and environment inputs
    ///
    /// Gene precedence: `gene`, then a non-empty `env_gene`, then `DEFAULT_GENE`.
    /// Without `keys` the example keys are searched; their expectations apply
    /// only to the embedded gene. Explicit keys are report only.
    pub fn resolve(gene: Option<String>, env_gene: Option<String>, keys: Vec<Codon>) -> Self {
        let gene = gene.or_else(|| env_gene.filter(|g| !g.is_empty()));

        match (gene, keys.is_empty()) {
            (None, true) => Self::default_example(),
            (Some(gene), true) => Self::with_default_keys(gene),
            (gene, false) => Self::new(
                gene.unwrap_or_else(|| DEFAULT_GENE.to_string()),
                keys.into_iter().map(Query::new).collect(),
            ),
        }
    }
}

/// Result of one query under both strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOutcome {
    pub key: Codon,
    pub linear: bool,
    pub binary: bool,
    pub expected: Option<bool>,
}

impl QueryOutcome {
    /// Check if both strategies returned the same answer
    pub fn agrees(&self) -> bool {
        self.linear == self.binary
    }

    pub fn result(&self, strategy: SearchStrategy) -> bool {
        match strategy {
            SearchStrategy::Linear => self.linear,
            SearchStrategy::Binary => self.binary,
        }
    }
}

/// Outcomes of a search run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Number of codons decoded from the gene
    pub codon_count: usize,
    pub outcomes: Vec<QueryOutcome>,
}

/// Search workflow errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("failed to decode gene: {0}")]
    Decode(#[from] DecodeError),
    /// Linear and binary search disagree
    #[error("strategy mismatch for {key}: linear={linear}, binary={binary}")]
    StrategyMismatch {
        key: Codon,
        linear: bool,
        binary: bool,
    },
    /// Outcome differs from the query's expectation
    #[error("unexpected outcome for {key}: expected found={expected}, got found={found}")]
    UnexpectedOutcome {
        key: Codon,
        expected: bool,
        found: bool,
    },
}

/// Run every query against an already decoded gene
pub fn search_gene(gene: &Gene, queries: &[Query]) -> SearchReport {
    let sorted = gene.sorted();

    let outcomes = queries
        .iter()
        .map(|query| {
            let outcome = QueryOutcome {
                key: query.key,
                linear: SearchStrategy::Linear.contains(gene.codons(), &query.key),
                binary: SearchStrategy::Binary.contains(sorted.as_slice(), &query.key),
                expected: query.expected,
            };
            debug!(
                key = %outcome.key,
                linear = outcome.linear,
                binary = outcome.binary,
                "query finished"
            );
            outcome
        })
        .collect();

    SearchReport {
        codon_count: gene.len(),
        outcomes,
    }
}

/// Decode the configured gene and run every query
pub fn run_search(config: &SearchConfig) -> Result<SearchReport, SearchError> {
    let gene = Gene::decode(&config.gene)?;
    info!(
        codons = gene.len(),
        queries = config.queries.len(),
        "searching gene"
    );
    Ok(search_gene(&gene, &config.queries))
}

/// Verify strategy agreement and expectations, reporting the first violation
pub fn verify_report(report: &SearchReport) -> Result<(), SearchError> {
    for outcome in &report.outcomes {
        if !outcome.agrees() {
            return Err(SearchError::StrategyMismatch {
                key: outcome.key,
                linear: outcome.linear,
                binary: outcome.binary,
            });
        }

        if let Some(expected) = outcome.expected
            && outcome.linear != expected
        {
            return Err(SearchError::UnexpectedOutcome {
                key: outcome.key,
                expected,
                found: outcome.linear,
            });
        }
    }

    Ok(())
}
