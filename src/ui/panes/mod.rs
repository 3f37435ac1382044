//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes, one
//! module per pane:
//!
//! - [`tree`]: the tree diagram, colored by the current step's state
//! - [`stack`]: the simulated stack, bottom-to-top
//! - [`result`]: the values output so far
//! - [`trace`]: scrolling log of step descriptions up to the cursor
//! - [`status`]: status bar with position, method, and keybindings
//!
//! Each pane module exports a `render_*_pane()` function taking the frame,
//! its area, the data it draws, focus state, and (where scrollable) a
//! mutable scroll state. Panes are stateless beyond their scroll state; all
//! displayed data comes from the current [`Step`](crate::engine::Step).

pub mod result;
pub mod stack;
pub mod status;
pub mod trace;
pub mod tree;

pub use result::render_result_pane;
pub use stack::{render_stack_pane, StackScrollState};
pub use status::render_status_bar;
pub use trace::render_trace_pane;
pub use tree::{render_tree_pane, TreeScrollState};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Standard pane block with the focus-dependent border style.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}
