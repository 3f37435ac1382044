//! # Introduction
//!
//! treetrace parses a level-order array literal into a binary tree, runs an
//! inorder traversal while recording every primitive operation, and replays
//! the recorded trace forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Parser → Tree → Engine → Steps → Playback → TUI
//! ```
//!
//! 1. [`parser`] — scans the bracketed input literal (`[1,null,2,3]`).
//! 2. [`tree`] — arena-allocated binary tree built by a queue-based
//!    level-order builder, plus a random generator and preset inputs.
//! 3. [`engine`] — executes the traversal (recursive or iterative) and
//!    records a [`engine::Step`] for every push, pop, visit, and move-right.
//! 4. [`playback`] — a cursor over the recorded steps: forward, backward,
//!    rewind, jump to end, seek.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Traversal variants
//!
//! Recursive (genuine recursion with a simulated stack kept observable) and
//! iterative (explicit stack driven by a phase-tagged state machine). Both
//! terminate with the same inorder sequence; the intermediate steps differ.

pub mod engine;
pub mod parser;
pub mod playback;
pub mod tree;
pub mod ui;
