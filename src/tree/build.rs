//! Tree construction
//!
//! The level-order builder follows the compact (LeetCode-style) encoding:
//! entry 0 is the root, and each subsequent pair of entries gives the left
//! and right children of the next node in breadth-first order. `null`
//! entries attach nothing and are never enqueued, so the descendants of an
//! absent node do not appear in the array at all.

use super::{NodeId, Tree};
use rand::Rng;
use std::collections::VecDeque;

impl Tree {
    /// Build a tree from a compact level-order sequence.
    ///
    /// An empty sequence or a leading `None` produces an empty tree. Entries
    /// beyond the last reachable position are ignored.
    pub fn from_level_order(entries: &[Option<i64>]) -> Tree {
        let mut tree = Tree::new();

        let root_value = match entries.first() {
            Some(&Some(value)) => value,
            _ => return tree,
        };

        let root = tree.push_node(root_value);
        tree.set_root(root);

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(root);

        let mut next = 1;
        while let Some(parent) = queue.pop_front() {
            if next >= entries.len() {
                break;
            }

            if let Some(value) = entries[next] {
                let child = tree.push_node(value);
                tree.set_left(parent, child);
                queue.push_back(child);
            }
            next += 1;

            if next >= entries.len() {
                break;
            }
            if let Some(value) = entries[next] {
                let child = tree.push_node(value);
                tree.set_right(parent, child);
                queue.push_back(child);
            }
            next += 1;
        }

        tree
    }
}

/// Probability that a candidate child slot holds a node.
const NODE_PROBABILITY: f64 = 0.7;

/// Value range for generated nodes, chosen to stay narrow on screen.
const VALUE_RANGE: std::ops::RangeInclusive<i64> = 1..=99;

/// Generate a random compact level-order sequence with at most `max_nodes`
/// nodes (always at least a root).
///
/// Each child slot of an already-placed node holds a value with fixed
/// probability, so the generated trees vary in both shape and size. The
/// result feeds [`Tree::from_level_order`] and can be echoed back to the
/// user as an input literal via [`format_level_order`].
pub fn random_level_order<R: Rng>(rng: &mut R, max_nodes: usize) -> Vec<Option<i64>> {
    let max_nodes = max_nodes.max(1);
    let mut entries: Vec<Option<i64>> = vec![Some(rng.gen_range(VALUE_RANGE))];
    let mut placed = 1;

    // Child slots of placed nodes, in breadth-first order
    let mut open_slots = 2;
    let mut slot = 0;
    while slot < open_slots && placed < max_nodes {
        if rng.gen_bool(NODE_PROBABILITY) {
            entries.push(Some(rng.gen_range(VALUE_RANGE)));
            placed += 1;
            open_slots += 2;
        } else {
            entries.push(None);
        }
        slot += 1;
    }

    // Drop trailing nulls so the echoed literal stays compact
    while entries.last() == Some(&None) {
        entries.pop();
    }

    entries
}

/// Format a level-order sequence back into the bracketed input literal.
pub fn format_level_order(entries: &[Option<i64>]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|entry| match entry {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        })
        .collect();
    format!("[{}]", items.join(","))
}
