//! Iterative traversal with step tracing
//!
//! The canonical explicit-stack algorithm, driven by a phase-tagged state
//! machine instead of sentinel reassignment so that every transition is an
//! auditable `match` arm. Phases:
//!
//! - `DescendLeft`: push the current node and follow left children
//! - `Process`: pop the stack top and output it
//! - `DescendRight`: enter the right subtree, or backtrack if there is none
//! - `Done`: pointer cleared and stack empty
//!
//! Each emitted step performs at most one stack mutation.

use super::step::{Action, Step, Tracer};
use crate::tree::{NodeId, Tree};

/// Phase of the iterative state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    DescendLeft,
    Process,
    DescendRight,
    Done,
}

/// Plain iterative inorder traversal, returning only the value sequence.
pub fn traverse_iterative(tree: &Tree) -> Vec<i64> {
    let mut result = Vec::new();
    let mut stack: Vec<NodeId> = Vec::new();
    let mut current = tree.root();

    while current.is_some() || !stack.is_empty() {
        while let Some(id) = current {
            stack.push(id);
            current = tree.left(id);
        }
        if let Some(id) = stack.pop() {
            result.push(tree.value(id));
            current = tree.right(id);
        }
    }

    result
}

/// Iterative inorder traversal recording a step for every operation.
pub fn traverse_iterative_with_steps(tree: &Tree) -> Vec<Step> {
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
            "Starting iterative traversal at root node {}",
            tree.value(root)
        ),
    );

    let mut current = Some(root);
    let mut phase = Phase::DescendLeft;

    loop {
        phase = match phase {
            Phase::DescendLeft => match current {
                Some(id) => {
                    let value = tree.value(id);
                    tracer.push(id);
                    tracer.emit(
                        Action::Push,
                        Some(id),
                        format!("Pushed node {value} ({id}), heading down its left subtree"),
                    );

                    match tree.left(id) {
                        Some(left) => {
                            current = Some(left);
                            tracer.emit(
                                Action::Visit,
                                Some(left),
                                format!(
                                    "Moving to left child {} of node {value}",
                                    tree.value(left)
                                ),
                            );
                            Phase::DescendLeft
                        }
                        None => {
                            tracer.emit(
                                Action::Visit,
                                Some(id),
                                format!("Node {value} has no left subtree, processing it next"),
                            );
                            Phase::Process
                        }
                    }
                }
                None if tracer.stack_is_empty() => Phase::Done,
                None => Phase::Process,
            },

            Phase::Process => match tracer.pop() {
                Some(id) => {
                    let value = tree.value(id);
                    current = Some(id);
                    tracer.emit(
                        Action::Pop,
                        Some(id),
                        format!("Popped node {value} ({id}) off the stack"),
                    );

                    tracer.record_output(id);
                    tracer.emit(
                        Action::Visit,
                        Some(id),
                        format!("Output node {value}, appended to the result"),
                    );

                    Phase::DescendRight
                }
                None => Phase::Done,
            },

            Phase::DescendRight => match current {
                Some(id) => {
                    let value = tree.value(id);
                    match tree.right(id) {
                        Some(right) => {
                            current = Some(right);
                            tracer.emit(
                                Action::MoveRight,
                                Some(right),
                                format!(
                                    "Moving to right child {} of node {value}",
                                    tree.value(right)
                                ),
                            );
                            Phase::DescendLeft
                        }
                        None => {
                            tracer.emit(
                                Action::MoveRight,
                                Some(id),
                                format!("Node {value} has no right subtree, backtracking"),
                            );
                            current = None;
                            if tracer.stack_is_empty() {
                                Phase::Done
                            } else {
                                Phase::Process
                            }
                        }
                    }
                }
                None => Phase::Done,
            },

            Phase::Done => break,
        };
    }

    tracer.emit_summary();
    tracer.finish()
}
