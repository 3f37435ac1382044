//! Step records and the trace accumulator
//!
//! A [`Step`] is one immutable snapshot of the traversal state, captured
//! after every primitive operation. The [`Tracer`] owns the live state
//! (simulated stack, result, visited list) and clones it into a new `Step`
//! on each [`Tracer::emit`]; the traversal functions thread one tracer
//! through their whole run instead of closing over shared mutable arrays.

use crate::tree::{NodeId, Tree};
use std::fmt;

/// The primitive operation that produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Push,
    Pop,
    Visit,
    MoveRight,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Push => "push",
            Action::Pop => "pop",
            Action::Visit => "visit",
            Action::MoveRight => "move-right",
        };
        write!(f, "{}", name)
    }
}

/// One recorded snapshot of traversal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Simulated stack, bottom-to-top.
    pub stack: Vec<NodeId>,
    /// Values of the stacked nodes, element-wise parallel to `stack`.
    pub stack_values: Vec<i64>,
    /// Node being acted upon, if any.
    pub current: Option<NodeId>,
    pub current_value: Option<i64>,
    /// Values emitted so far, in emission order.
    pub result: Vec<i64>,
    /// Ids emitted so far, in emission order (parallel to `result`).
    pub visited: Vec<NodeId>,
    pub action: Action,
    /// Render-only prose; never used for control logic.
    pub description: String,
}

impl Step {
    /// Whether the node has been output into the result by this step.
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    /// Whether the node sits on the simulated stack at this step.
    pub fn is_on_stack(&self, id: NodeId) -> bool {
        self.stack.contains(&id)
    }
}

/// Trace accumulator threaded through a traversal run.
pub(super) struct Tracer<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
    result: Vec<i64>,
    visited: Vec<NodeId>,
    steps: Vec<Step>,
}

impl<'a> Tracer<'a> {
    pub(super) fn new(tree: &'a Tree) -> Self {
        Tracer {
            tree,
            stack: Vec::new(),
            result: Vec::new(),
            visited: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Capture the current state as a new step.
    pub(super) fn emit(&mut self, action: Action, current: Option<NodeId>, description: String) {
        self.steps.push(Step {
            stack: self.stack.clone(),
            stack_values: self.stack.iter().map(|&id| self.tree.value(id)).collect(),
            current,
            current_value: current.map(|id| self.tree.value(id)),
            result: self.result.clone(),
            visited: self.visited.clone(),
            action,
            description,
        });
    }

    pub(super) fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    pub(super) fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    pub(super) fn stack_is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Append the node's value to the result and mark it visited.
    pub(super) fn record_output(&mut self, id: NodeId) {
        self.result.push(self.tree.value(id));
        self.visited.push(id);
    }

    pub(super) fn emit_init(&mut self) {
        self.emit(
            Action::Visit,
            None,
            "Initialized: empty stack, empty result".to_string(),
        );
    }

    pub(super) fn emit_empty_end(&mut self) {
        self.emit(
            Action::Visit,
            None,
            "Tree is empty, traversal complete".to_string(),
        );
    }

    pub(super) fn emit_summary(&mut self) {
        let description = format!("Traversal complete, result: {:?}", self.result);
        self.emit(Action::Visit, None, description);
    }

    pub(super) fn finish(self) -> Vec<Step> {
        self.steps
    }
}
