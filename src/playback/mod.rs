#![allow(dead_code)] // Complete API module, not all methods currently used
//! Playback over a recorded step sequence
//!
//! [`Playback`] owns one step sequence and a cursor into it. It never
//! mutates the steps and contains no traversal logic; all navigation is
//! index arithmetic with clamping, so a consumer can never observe an
//! out-of-range position.
//!
//! When the tree or the algorithm changes, the caller constructs a fresh
//! `Playback` and assigns it in one move, replacing sequence and cursor
//! together. An index is never carried over to a sequence it was not
//! produced for.

use crate::engine::Step;

/// Cursor over an immutable step sequence.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    position: usize,
}

impl Playback {
    /// Take ownership of a step sequence, positioned at the first step.
    ///
    /// The engine guarantees a non-empty sequence (an empty tree still
    /// yields two steps), so `current` is always defined.
    pub fn new(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "engine step sequences are non-empty");
        Playback { steps, position: 0 }
    }

    /// The step at the cursor.
    pub fn current(&self) -> &Step {
        &self.steps[self.position]
    }

    /// All recorded steps, read-only.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.steps.len()
    }

    /// Advance one step. Returns false if already at the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Go back one step. Returns false if already at the first step.
    pub fn step_backward(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.steps.len().saturating_sub(1);
    }

    /// Move the cursor to `index`, clamped to the valid range.
    pub fn seek(&mut self, index: usize) {
        self.position = index.min(self.steps.len().saturating_sub(1));
    }
}
