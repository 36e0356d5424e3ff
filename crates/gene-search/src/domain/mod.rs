//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and types without I/O dependencies.

pub mod codon;
pub mod gene;
pub mod nucleotide;
pub mod search;
