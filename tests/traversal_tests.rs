// Traversal engine tests: scenario coverage and trace invariants

use treetrace::engine::{
    traverse_iterative, traverse_iterative_with_steps, traverse_recursive,
    traverse_recursive_with_steps, traverse_with_steps, Action, Method, Step,
};
use treetrace::parser::parse_level_order;
use treetrace::tree::{NodeId, Tree};

fn build(input: &str) -> Tree {
    let entries = parse_level_order(input).expect("test input must parse");
    Tree::from_level_order(&entries)
}

/// Independent reference walk used to check expected sequences without
/// trusting the engine under test.
fn reference_inorder(tree: &Tree) -> Vec<i64> {
    fn walk(tree: &Tree, id: Option<NodeId>, out: &mut Vec<i64>) {
        if let Some(id) = id {
            walk(tree, tree.left(id), out);
            out.push(tree.value(id));
            walk(tree, tree.right(id), out);
        }
    }
    let mut out = Vec::new();
    walk(tree, tree.root(), &mut out);
    out
}

fn both_traces(tree: &Tree) -> [Vec<Step>; 2] {
    [
        traverse_recursive_with_steps(tree),
        traverse_iterative_with_steps(tree),
    ]
}

// === Concrete scenarios ===

#[test]
fn test_empty_tree() {
    let tree = build("[]");
    assert_eq!(traverse_recursive(&tree), Vec::<i64>::new());
    assert_eq!(traverse_iterative(&tree), Vec::<i64>::new());

    for steps in both_traces(&tree) {
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.stack.is_empty()
            && s.result.is_empty()
            && s.visited.is_empty()
            && s.current.is_none()));
    }
}

#[test]
fn test_single_node() {
    let tree = build("[1]");
    assert_eq!(traverse_recursive(&tree), vec![1]);

    // Fixed script: init, root, push, no-left, output, no-right, pop, summary
    let steps = traverse_recursive_with_steps(&tree);
    assert_eq!(steps.len(), 8);
    let actions: Vec<Action> = steps.iter().map(|s| s.action).collect();
    assert_eq!(
        actions,
        vec![
            Action::Visit,
            Action::Visit,
            Action::Push,
            Action::Visit,
            Action::Visit,
            Action::Visit,
            Action::Pop,
            Action::Visit,
        ]
    );
}

#[test]
fn test_leetcode_default_shape() {
    // [1,null,2,3]: root 1 has no left child, right child 2, and 3 is the
    // left child of 2
    let tree = build("[1,null,2,3]");
    assert_eq!(traverse_recursive(&tree), vec![1, 3, 2]);
    assert_eq!(traverse_iterative(&tree), vec![1, 3, 2]);
}

#[test]
fn test_zigzag_tree_matches_reference_walk() {
    let tree = build("[5,4,7,3,null,2,null,-1,null,9]");
    let expected = reference_inorder(&tree);
    assert_eq!(traverse_recursive(&tree), expected);
    assert_eq!(traverse_iterative(&tree), expected);
    // Pin the shape once by hand as well: left arm 3←4 with leaf -1, right
    // arm 2←7 with leaf 9
    assert_eq!(expected, vec![-1, 3, 4, 5, 9, 2, 7]);
}

#[test]
fn test_left_skewed_chain() {
    let tree = build("[1,2,null,3]");
    assert_eq!(traverse_recursive(&tree), vec![3, 2, 1]);

    // The iterative variant must pile up the whole chain before popping
    let steps = traverse_iterative_with_steps(&tree);
    let first_pop = steps
        .iter()
        .position(|s| s.action == Action::Pop)
        .expect("a pop must occur");
    let max_before_pop = steps[..first_pop]
        .iter()
        .map(|s| s.stack.len())
        .max()
        .unwrap_or(0);
    assert_eq!(max_before_pop, 3);
}

#[test]
fn test_duplicate_values_tracked_by_id() {
    let tree = build("[2,2,2]");
    let root = tree.root().unwrap();
    let left = tree.left(root).unwrap();
    let right = tree.right(root).unwrap();

    for steps in both_traces(&tree) {
        let last = steps.last().unwrap();
        assert_eq!(last.result, vec![2, 2, 2]);
        // All three distinct ids are visited despite equal values
        assert_eq!(last.visited.len(), 3);
        assert!(last.is_visited(root));
        assert!(last.is_visited(left));
        assert!(last.is_visited(right));
        assert_ne!(left, right);

        // The left leaf is output first, the right leaf last
        assert_eq!(last.visited.first(), Some(&left));
        assert_eq!(last.visited.last(), Some(&right));
    }
}

// === Trace invariants, checked across a spread of shapes ===

const SHAPES: &[&str] = &[
    "[]",
    "[1]",
    "[1,null,2,3]",
    "[1,2,null,3]",
    "[1,null,2,null,3]",
    "[4,2,6,1,3,5,7]",
    "[5,4,7,3,null,2,null,-1,null,9]",
    "[2,2,2]",
    "[10,5,15,3,7,null,18,1,null,6]",
];

#[test]
fn test_equivalence_of_variants() {
    for input in SHAPES {
        let tree = build(input);
        let expected = reference_inorder(&tree);

        assert_eq!(traverse_recursive(&tree), expected, "{input}");
        assert_eq!(traverse_iterative(&tree), expected, "{input}");
        for steps in both_traces(&tree) {
            assert_eq!(steps.last().unwrap().result, expected, "{input}");
        }
    }
}

#[test]
fn test_result_is_monotone_prefix_extension() {
    for input in SHAPES {
        let tree = build(input);
        for steps in both_traces(&tree) {
            for pair in steps.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                assert!(next.result.len() >= prev.result.len(), "{input}");
                assert_eq!(&next.result[..prev.result.len()], &prev.result[..], "{input}");
            }
        }
    }
}

#[test]
fn test_stack_discipline_one_mutation_per_step() {
    for input in SHAPES {
        let tree = build(input);
        for steps in both_traces(&tree) {
            for pair in steps.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                if next.stack.len() + 1 == prev.stack.len() {
                    // One pop: the remainder is untouched
                    assert_eq!(&prev.stack[..next.stack.len()], &next.stack[..], "{input}");
                } else if next.stack.len() == prev.stack.len() + 1 {
                    // One push on top
                    assert_eq!(&next.stack[..prev.stack.len()], &prev.stack[..], "{input}");
                } else {
                    // No structural change
                    assert_eq!(prev.stack, next.stack, "{input}");
                }
            }
        }
    }
}

#[test]
fn test_visited_matches_result_at_every_step() {
    for input in SHAPES {
        let tree = build(input);
        for steps in both_traces(&tree) {
            for step in &steps {
                assert_eq!(step.visited.len(), step.result.len(), "{input}");
                for (id, value) in step.visited.iter().zip(&step.result) {
                    assert_eq!(tree.value(*id), *value, "{input}");
                }
            }
        }
    }
}

#[test]
fn test_termination_shape() {
    for input in SHAPES {
        let tree = build(input);
        let expected = reference_inorder(&tree);
        for steps in both_traces(&tree) {
            let last = steps.last().unwrap();
            assert!(last.stack.is_empty(), "{input}");
            assert_eq!(last.current, None, "{input}");
            assert_eq!(last.result, expected, "{input}");
        }
    }
}

#[test]
fn test_step_count_is_linear_in_tree_size() {
    for input in SHAPES {
        let tree = build(input);
        for (method, steps) in [
            (Method::Recursive, traverse_recursive_with_steps(&tree)),
            (Method::Iterative, traverse_iterative_with_steps(&tree)),
        ] {
            // Three framing steps at most, and a bounded number per node
            assert!(
                steps.len() <= 3 + 7 * tree.len(),
                "{input} via {method}: {} steps for {} nodes",
                steps.len(),
                tree.len()
            );
        }
    }
}

#[test]
fn test_idempotence() {
    for input in SHAPES {
        let tree = build(input);
        for method in [Method::Recursive, Method::Iterative] {
            let first = traverse_with_steps(&tree, method);
            let second = traverse_with_steps(&tree, method);
            assert_eq!(first, second, "{input} via {method}");
        }
    }
}

#[test]
fn test_dispatcher_matches_variants() {
    let tree = build("[4,2,6,1,3,5,7]");
    assert_eq!(
        traverse_with_steps(&tree, Method::Recursive),
        traverse_recursive_with_steps(&tree)
    );
    assert_eq!(
        traverse_with_steps(&tree, Method::Iterative),
        traverse_iterative_with_steps(&tree)
    );
}
