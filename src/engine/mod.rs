//! Step-tracing inorder traversal engine
//!
//! The engine runs an inorder traversal over a [`Tree`](crate::tree::Tree)
//! and records a [`Step`] for every primitive operation (push, pop, visit,
//! move-right) together with the full observable state at that instant.
//! The recorded sequence is the single source of truth for the playback
//! controls and every pane of the UI.
//!
//! Two variants are provided, selected by [`Method`]:
//! - [`traverse_recursive_with_steps`] — genuine recursion with an
//!   observable simulated stack
//! - [`traverse_iterative_with_steps`] — explicit stack driven by a
//!   phase-tagged state machine
//!
//! Both produce the same final inorder sequence; the intermediate steps and
//! their counts differ. [`traverse_recursive`] and [`traverse_iterative`]
//! return only the final sequence for callers that do not need the trace.
//!
//! The engine is pure: no I/O, no hidden state, identical output for
//! identical input. An empty tree yields exactly two steps (initialization
//! and termination); every final step has an empty stack, no current node,
//! and the complete inorder result.

mod iterative;
mod recursive;
mod step;

pub use iterative::{traverse_iterative, traverse_iterative_with_steps};
pub use recursive::{traverse_recursive, traverse_recursive_with_steps};
pub use step::{Action, Step};

use crate::tree::Tree;
use std::fmt;
use std::str::FromStr;

/// Traversal algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Recursive,
    Iterative,
}

impl Method {
    /// The other variant, for the UI's method-switch key.
    pub fn toggled(self) -> Self {
        match self {
            Method::Recursive => Method::Iterative,
            Method::Iterative => Method::Recursive,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Recursive => "recursive",
            Method::Iterative => "iterative",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Method::Recursive),
            "iterative" => Ok(Method::Iterative),
            other => Err(format!(
                "unknown method '{}', expected 'recursive' or 'iterative'",
                other
            )),
        }
    }
}

/// Run the selected traversal variant and return its step sequence.
pub fn traverse_with_steps(tree: &Tree, method: Method) -> Vec<Step> {
    match method {
        Method::Recursive => traverse_recursive_with_steps(tree),
        Method::Iterative => traverse_iterative_with_steps(tree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    fn build(entries: &[Option<i64>]) -> Tree {
        Tree::from_level_order(entries)
    }

    #[test]
    fn test_empty_tree_two_steps() {
        let tree = Tree::new();
        for method in [Method::Recursive, Method::Iterative] {
            let steps = traverse_with_steps(&tree, method);
            assert_eq!(steps.len(), 2, "{method} variant");
            for step in &steps {
                assert!(step.stack.is_empty());
                assert!(step.result.is_empty());
                assert_eq!(step.current, None);
            }
            // The two steps differ only by description
            assert_ne!(steps[0].description, steps[1].description);
        }
    }

    #[test]
    fn test_single_node_recursive_step_count() {
        // init, root, push, no-left, output, no-right, pop, summary
        let tree = build(&[Some(1)]);
        let steps = traverse_recursive_with_steps(&tree);
        assert_eq!(steps.len(), 8);
        assert_eq!(steps.last().map(|s| s.result.clone()), Some(vec![1]));
    }

    #[test]
    fn test_single_node_iterative_step_count() {
        // init, root, push, no-left, pop, output, no-right, summary
        let tree = build(&[Some(1)]);
        let steps = traverse_iterative_with_steps(&tree);
        assert_eq!(steps.len(), 8);
        assert_eq!(steps.last().map(|s| s.result.clone()), Some(vec![1]));
    }

    #[test]
    fn test_stack_values_parallel_to_stack() {
        let tree = build(&[Some(4), Some(2), Some(6), Some(1), Some(3)]);
        for method in [Method::Recursive, Method::Iterative] {
            for step in traverse_with_steps(&tree, method) {
                assert_eq!(step.stack.len(), step.stack_values.len());
                for (id, value) in step.stack.iter().zip(&step.stack_values) {
                    assert_eq!(tree.value(*id), *value);
                }
            }
        }
    }

    #[test]
    fn test_current_value_matches_current() {
        let tree = build(&[Some(1), None, Some(2), Some(3)]);
        for method in [Method::Recursive, Method::Iterative] {
            for step in traverse_with_steps(&tree, method) {
                assert_eq!(step.current_value, step.current.map(|id| tree.value(id)));
            }
        }
    }

    #[test]
    fn test_method_parsing_and_display() {
        assert_eq!("recursive".parse::<Method>().unwrap(), Method::Recursive);
        assert_eq!("iterative".parse::<Method>().unwrap(), Method::Iterative);
        assert!("preorder".parse::<Method>().is_err());
        assert_eq!(Method::Recursive.to_string(), "recursive");
        assert_eq!(Method::Iterative.toggled(), Method::Recursive);
    }
}
