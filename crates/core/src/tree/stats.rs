//! Tree shape statistics.

use serde::Serialize;

use super::forest::{Forest, sort_by_name};

/// Aggregate statistics about the parent-link forest.
#[derive(Debug, Clone, Serialize)]
pub struct TreeStats {
    pub total_notes: usize,
    pub root_count: usize,
    /// Notes with no children.
    pub leaf_count: usize,
    /// Notes with neither parent nor children.
    pub orphan_count: usize,
    /// Longest root-to-leaf chain (0 for a vault of loose notes).
    pub max_depth: usize,
    pub roots: Vec<String>,
    pub orphans: Vec<String>,
}

impl TreeStats {
    #[must_use]
    pub fn compute(forest: &Forest) -> Self {
        let mut leaf_count = 0;
        let mut orphans = Vec::new();
        for name in forest.names() {
            if forest.children(name).is_empty() {
                leaf_count += 1;
                if forest.parent(name).is_none() {
                    orphans.push(name.to_string());
                }
            }
        }
        sort_by_name(&mut orphans);

        let max_depth =
            forest.roots().iter().map(|root| subtree_depth(forest, root)).max().unwrap_or(0);

        Self {
            total_notes: forest.len(),
            root_count: forest.roots().len(),
            leaf_count,
            orphan_count: orphans.len(),
            max_depth,
            roots: forest.roots().to_vec(),
            orphans,
        }
    }
}

/// Maximum depth of the subtree under `name` (0 for a leaf).
#[must_use]
pub fn subtree_depth(forest: &Forest, name: &str) -> usize {
    forest
        .children(name)
        .iter()
        .map(|child| 1 + subtree_depth(forest, child))
        .max()
        .unwrap_or(0)
}

/// Number of descendants under `name`, not counting the note itself.
#[must_use]
pub fn count_descendants(forest: &Forest, name: &str) -> usize {
    forest
        .children(name)
        .iter()
        .map(|child| 1 + count_descendants(forest, child))
        .sum()
}
