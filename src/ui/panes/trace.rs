//! Trace pane rendering
//!
//! A scrolling log of step descriptions from the start of the traversal up
//! to the playback cursor, newest last. The app sets the scroll offset to
//! `usize::MAX` whenever the cursor moves; the renderer clamps it so the
//! log follows the newest entry until the user scrolls away.

use super::pane_block;
use crate::engine::{Action, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the trace pane. `position` is the playback cursor; only steps up
/// to and including it are listed.
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    position: usize,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Trace ", is_focused);

    let shown = &steps[..=position.min(steps.len().saturating_sub(1))];
    let mut all_items: Vec<ListItem> = Vec::new();

    for (index, step) in shown.iter().enumerate() {
        let is_current = index + 1 == shown.len();
        let action_style = Style::default().fg(match step.action {
            Action::Push => DEFAULT_THEME.primary,
            Action::Pop => DEFAULT_THEME.error,
            Action::Visit => DEFAULT_THEME.success,
            Action::MoveRight => DEFAULT_THEME.secondary,
        });
        let text_style = if is_current {
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{:>4} ", index),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(format!("{:<10} ", step.action.to_string()), action_style),
            Span::styled(step.description.clone(), text_style),
        ]);
        all_items.push(ListItem::new(line));
    }

    // Clamp the scroll offset; usize::MAX means "follow the newest entry"
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = total_items.saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
