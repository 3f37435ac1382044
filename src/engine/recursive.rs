//! Recursive traversal with step tracing
//!
//! Genuine recursion over the arena. The simulated stack inside the
//! [`Tracer`] mirrors the call stack one-to-one so that every recursion
//! depth is visible in the recorded steps: a node is pushed on entry and
//! popped after both subtrees are handled.

use super::step::{Action, Step, Tracer};
use crate::tree::{NodeId, Tree};

/// Plain recursive inorder traversal, returning only the value sequence.
pub fn traverse_recursive(tree: &Tree) -> Vec<i64> {
    fn inorder(tree: &Tree, id: Option<NodeId>, result: &mut Vec<i64>) {
        if let Some(id) = id {
            inorder(tree, tree.left(id), result);
            result.push(tree.value(id));
            inorder(tree, tree.right(id), result);
        }
    }

    let mut result = Vec::new();
    inorder(tree, tree.root(), &mut result);
    result
}

/// Recursive inorder traversal recording a step for every operation.
pub fn traverse_recursive_with_steps(tree: &Tree) -> Vec<Step> {
    let mut tracer = Tracer::new(tree);
    tracer.emit_init();

    let root = match tree.root() {
        Some(root) => root,
        None => {
            tracer.emit_empty_end();
            return tracer.finish();
        }
    };

    tracer.emit(
        Action::Visit,
        Some(root),
        format!(
            "Starting recursive traversal at root node {}",
            tree.value(root)
        ),
    );

    walk(tree, root, 1, &mut tracer);

    tracer.emit_summary();
    tracer.finish()
}

fn walk(tree: &Tree, id: NodeId, depth: usize, tracer: &mut Tracer<'_>) {
    let value = tree.value(id);

    tracer.push(id);
    tracer.emit(
        Action::Push,
        Some(id),
        format!("Depth {depth}: pushed node {value}, descending into its left subtree"),
    );

    if let Some(left) = tree.left(id) {
        tracer.emit(
            Action::Visit,
            Some(left),
            format!(
                "Depth {depth}: moving to left child {} of node {value}",
                tree.value(left)
            ),
        );
        walk(tree, left, depth + 1, tracer);
    } else {
        tracer.emit(
            Action::Visit,
            Some(id),
            format!("Depth {depth}: node {value} has no left subtree, outputting it next"),
        );
    }

    // The left subtree is done: this is the moment the node is output
    tracer.record_output(id);
    tracer.emit(
        Action::Visit,
        Some(id),
        format!("Depth {depth}: output node {value}, appended to the result"),
    );

    if let Some(right) = tree.right(id) {
        tracer.emit(
            Action::MoveRight,
            Some(right),
            format!(
                "Depth {depth}: moving to right child {} of node {value}",
                tree.value(right)
            ),
        );
        walk(tree, right, depth + 1, tracer);
    } else {
        tracer.emit(
            Action::Visit,
            Some(id),
            format!("Depth {depth}: node {value} has no right subtree, returning"),
        );
    }

    tracer.pop();
    tracer.emit(
        Action::Pop,
        Some(id),
        format!("Depth {depth}: finished node {value}, popped it off the stack"),
    );
}
