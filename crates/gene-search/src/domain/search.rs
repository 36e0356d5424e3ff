//! Membership search over sequences
//!
//! Two strategies:
//! - Linear scan: requires only equality, works on any iterable
//! - Binary search: requires a total order and ascending-sorted input

use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Search for `key` by scanning every item in order
///
/// Makes no assumption about ordering. Returns false on an empty input.
pub fn linear_contains<'a, T, I>(items: I, key: &T) -> bool
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().any(|item| item == key)
}

/// Search for `key` in an ascending-sorted slice
///
/// Works on the closed index range `[low, high]`, halving it until the key is
/// found or the range is empty. The slice must be sorted ascending under
/// `Ord`; on unsorted input the result may be a false negative.
pub fn binary_contains<T: Ord>(sequence: &[T], key: &T) -> bool {
    if sequence.is_empty() {
        return false;
    }

    let mut low = 0usize;
    let mut high = sequence.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;
        trace!(low, high, mid, "binary search step");

        match sequence[mid].cmp(key) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // Key is smaller than every remaining element
                if mid == 0 {
                    return false;
                }
                high = mid - 1;
            }
            Ordering::Equal => return true,
        }
    }

    false
}

/// Search strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    Linear,
    Binary,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 2] = [Self::Linear, Self::Binary];

    /// Run this strategy over `sequence`
    ///
    /// `Binary` carries the same sortedness precondition as [`binary_contains`].
    pub fn contains<T: Ord>(self, sequence: &[T], key: &T) -> bool {
        match self {
            Self::Linear => linear_contains(sequence, key),
            Self::Binary => binary_contains(sequence, key),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // linear_contains tests
    // =========================================================================

    #[test]
    fn test_linear_empty() {
        let items: Vec<u32> = vec![];
        assert!(!linear_contains(&items, &1));
    }

    #[test]
    fn test_linear_unsorted() {
        let items = vec![9, 3, 7, 1, 3];
        assert!(linear_contains(&items, &7));
        assert!(linear_contains(&items, &3));
        assert!(!linear_contains(&items, &4));
    }

    #[test]
    fn test_linear_over_iterator() {
        let items = [10u8, 20, 30];
        assert!(linear_contains(items.iter().skip(1), &30));
        assert!(!linear_contains(items.iter().skip(1), &10));
    }

    // =========================================================================
    // binary_contains tests
    // =========================================================================

    #[test]
    fn test_binary_empty() {
        let items: Vec<u32> = vec![];
        assert!(!binary_contains(&items, &0));
    }

    #[test]
    fn test_binary_single() {
        assert!(binary_contains(&[5], &5));
        assert!(!binary_contains(&[5], &4));
        assert!(!binary_contains(&[5], &6));
    }

    #[test]
    fn test_binary_key_below_minimum() {
        let items = [2, 4, 6, 8];
        assert!(!binary_contains(&items, &1));
    }

    #[test]
    fn test_binary_key_above_maximum() {
        let items = [2, 4, 6, 8];
        assert!(!binary_contains(&items, &9));
    }

    #[test]
    fn test_binary_every_element_found() {
        let items: Vec<i32> = (0..17).map(|i| i * 3).collect();
        for item in &items {
            assert!(binary_contains(&items, item), "missing {}", item);
        }
        for gap in [1, 2, 4, 50] {
            assert!(!binary_contains(&items, &gap));
        }
    }

    #[test]
    fn test_binary_with_duplicates() {
        let items = [1, 1, 2, 2, 2, 3, 3];
        assert!(binary_contains(&items, &2));
        assert!(binary_contains(&items, &3));
        assert!(!binary_contains(&items, &0));
    }

    // =========================================================================
    // SearchStrategy tests
    // =========================================================================

    #[test]
    fn test_strategies_agree_on_sorted_input() {
        let items = ["ant", "bee", "cat", "dog"];
        for key in ["ant", "cat", "cow", "zebra"] {
            let linear = SearchStrategy::Linear.contains(&items, &key);
            let binary = SearchStrategy::Binary.contains(&items, &key);
            assert_eq!(linear, binary, "strategies disagree on {}", key);
        }
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(SearchStrategy::Linear.to_string(), "linear");
        assert_eq!(SearchStrategy::Binary.to_string(), "binary");
    }
}
