//! Stack pane rendering
//!
//! Displays the current step's simulated stack bottom-to-top, the way the
//! traversal builds it: the bottom entry is the first line, the top entry
//! the last, marked with a pointer. Auto-scrolls to the top of the stack
//! when it grows; otherwise the user's scroll position is respected.

use super::pane_block;
use crate::engine::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Scroll state for the stack pane.
#[derive(Debug, Default)]
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

/// Render the stack pane.
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let block = pane_block(" Stack ", is_focused);

    let mut all_items: Vec<ListItem> = Vec::new();

    if step.stack.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let top = step.stack.len() - 1;
        for (depth, (id, value)) in step.stack.iter().zip(&step.stack_values).enumerate() {
            let is_top = depth == top;
            let marker = if is_top { "▸ " } else { "  " };
            let entry_style = if is_top {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("[{}] ", depth),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{}", value), entry_style),
                Span::styled(
                    format!(" ({})", id),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ];
            if is_top {
                spans.push(Span::styled(
                    "  ← top",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            all_items.push(ListItem::new(Line::from(spans)));
        }
    }

    // Scrolling, with auto-follow when the stack grows
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > scroll_state.prev_item_count {
        // Stack grew: keep the newest (top) entry in view
        scroll_state.offset = total_items.saturating_sub(visible_height);
    } else {
        let max_scroll = total_items.saturating_sub(visible_height);
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    }
    scroll_state.prev_item_count = total_items;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
