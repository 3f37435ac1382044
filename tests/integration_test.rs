// End-to-end tests: input literal through parser, builder, engine, playback

use treetrace::engine::{traverse_with_steps, Method};
use treetrace::parser::parse_level_order;
use treetrace::playback::Playback;
use treetrace::tree::presets::PRESETS;
use treetrace::tree::Tree;
use treetrace::ui::layout::TreeLayout;

fn playback_for(input: &str, method: Method) -> Playback {
    let entries = parse_level_order(input).expect("input must parse");
    let tree = Tree::from_level_order(&entries);
    Playback::new(traverse_with_steps(&tree, method))
}

#[test]
fn test_full_pipeline_iterative() {
    let mut pb = playback_for("[1,null,2,3]", Method::Iterative);

    // Walk the whole trace forward, watching the result grow to completion
    let mut last_len = 0;
    loop {
        let step = pb.current();
        assert!(step.result.len() >= last_len);
        last_len = step.result.len();
        if !pb.step_forward() {
            break;
        }
    }

    assert!(pb.is_at_end());
    assert_eq!(pb.current().result, vec![1, 3, 2]);
    assert!(pb.current().stack.is_empty());
}

#[test]
fn test_full_pipeline_recursive() {
    let mut pb = playback_for("[4,2,6,1,3,5,7]", Method::Recursive);
    pb.jump_to_end();
    assert_eq!(pb.current().result, vec![1, 2, 3, 4, 5, 6, 7]);

    // Scrub back to the start and forward again: same data both times
    let end_step = pb.current().clone();
    pb.rewind_to_start();
    assert!(pb.current().result.is_empty());
    pb.jump_to_end();
    assert_eq!(*pb.current(), end_step);
}

#[test]
fn test_malformed_inputs_rejected_before_engine() {
    for bad in [
        "",
        "1,2,3",
        "[1,2",
        "[1,,2]",
        "[a]",
        "[1 2]",
        "[1,2]]",
        "[null-]",
    ] {
        let err = parse_level_order(bad);
        assert!(err.is_err(), "input {:?} should be rejected", bad);
    }
}

#[test]
fn test_format_error_is_displayable() {
    let err = parse_level_order("[1,oops]").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("offset"), "unexpected message: {}", text);
}

#[test]
fn test_switching_method_replaces_sequence_and_cursor_together() {
    let entries = parse_level_order("[4,2,6,1,3,5,7]").expect("input must parse");
    let tree = Tree::from_level_order(&entries);

    let mut pb = Playback::new(traverse_with_steps(&tree, Method::Recursive));
    pb.seek(pb.len() - 2);

    // A method switch builds a fresh playback in a single assignment; the
    // old cursor can never be applied to the new sequence
    pb = Playback::new(traverse_with_steps(&tree, Method::Iterative));
    assert_eq!(pb.position(), 0);
    assert!(pb.position() < pb.len());

    // Both sequences still agree on the final result
    pb.jump_to_end();
    assert_eq!(pb.current().result, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_presets_run_through_the_whole_stack() {
    for preset in PRESETS {
        let entries = parse_level_order(preset.input).expect("presets must parse");
        let tree = Tree::from_level_order(&entries);
        let layout = TreeLayout::compute(&tree);

        for id in tree.node_ids() {
            assert!(
                layout.position(id).is_some(),
                "preset '{}' node {} has no layout position",
                preset.name,
                id
            );
        }

        for method in [Method::Recursive, Method::Iterative] {
            let mut pb = Playback::new(traverse_with_steps(&tree, method));
            pb.jump_to_end();
            assert_eq!(
                pb.current().result.len(),
                tree.len(),
                "preset '{}' via {}",
                preset.name,
                method
            );
        }
    }
}

#[test]
fn test_scrubbing_is_random_access() {
    let pb = playback_for("[5,4,7,3,null,2,null,-1,null,9]", Method::Iterative);
    let mut scrubber = pb.clone();

    // Visit a few positions out of order; each lands on the recorded data
    for index in [7, 0, pb.len() - 1, 3, 3, 1] {
        scrubber.seek(index);
        assert_eq!(scrubber.position(), index);
        assert_eq!(*scrubber.current(), pb.steps()[index]);
    }
}
