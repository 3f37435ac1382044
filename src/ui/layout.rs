//! Tree diagram layout
//!
//! Maps every node to a character-grid position: the column comes from the
//! node's inorder rank, the row from its depth. Because inorder ranks are
//! unique, no two nodes share a column and the diagram is overlap-free by
//! construction; no iterative spacing fixups are needed.
//!
//! Rows alternate between node rows and connector rows, so a tree of height
//! `h` occupies `2h - 1` grid rows.

use crate::tree::{NodeId, Tree};
use rustc_hash::FxHashMap;

/// Gap between adjacent inorder columns, in characters.
const COLUMN_GAP: usize = 2;

/// Placement of one node on the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePosition {
    /// Character row of the node label (0-based, node rows only).
    pub row: usize,
    /// Character column where the label starts.
    pub col: usize,
    /// Character column of the label's midpoint, used for edge anchors.
    pub center: usize,
}

/// Computed layout for one tree.
#[derive(Debug, Clone, Default)]
pub struct TreeLayout {
    positions: FxHashMap<NodeId, NodePosition>,
    width: usize,
    height: usize,
}

impl TreeLayout {
    /// Lay out the whole tree. Empty trees produce an empty layout.
    pub fn compute(tree: &Tree) -> TreeLayout {
        let mut layout = TreeLayout::default();
        let Some(root) = tree.root() else {
            return layout;
        };

        // Column slots are sized to the widest label so ranks line up
        let label_width = tree
            .node_ids()
            .map(|id| tree.value(id).to_string().len())
            .max()
            .unwrap_or(1);
        let slot = label_width + COLUMN_GAP;

        let mut rank = 0usize;
        place(tree, root, 1, slot, label_width, &mut rank, &mut layout);

        layout.width = rank * slot;
        layout.height = 2 * tree.height() - 1;
        layout
    }

    pub fn position(&self, id: NodeId) -> Option<NodePosition> {
        self.positions.get(&id).copied()
    }

    /// Grid width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in characters (node and connector rows).
    pub fn height(&self) -> usize {
        self.height
    }
}

fn place(
    tree: &Tree,
    id: NodeId,
    depth: usize,
    slot: usize,
    label_width: usize,
    rank: &mut usize,
    layout: &mut TreeLayout,
) {
    if let Some(left) = tree.left(id) {
        place(tree, left, depth + 1, slot, label_width, rank, layout);
    }

    let label_len = tree.value(id).to_string().len();
    let col = *rank * slot + (label_width - label_len) / 2;
    layout.positions.insert(
        id,
        NodePosition {
            row: (depth - 1) * 2,
            col,
            center: col + label_len.saturating_sub(1) / 2,
        },
    );
    *rank += 1;

    if let Some(right) = tree.right(id) {
        place(tree, right, depth + 1, slot, label_width, rank, layout);
    }
}
