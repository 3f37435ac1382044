//! Result pane rendering
//!
//! Shows the inorder sequence emitted so far, the progress count, and the
//! action that produced the current step.

use super::pane_block;
use crate::engine::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the result pane. `total_nodes` is the size of the whole tree.
pub fn render_result_pane(
    frame: &mut Frame,
    area: Rect,
    step: &Step,
    total_nodes: usize,
    is_focused: bool,
) {
    let block = pane_block(" Result ", is_focused);

    let mut value_spans = vec![Span::styled("[", Style::default().fg(DEFAULT_THEME.fg))];
    for (i, value) in step.result.iter().enumerate() {
        if i > 0 {
            value_spans.push(Span::styled(", ", Style::default().fg(DEFAULT_THEME.comment)));
        }
        let style = if i + 1 == step.result.len() {
            Style::default()
                .fg(DEFAULT_THEME.value)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.value)
        };
        value_spans.push(Span::styled(value.to_string(), style));
    }
    value_spans.push(Span::styled("]", Style::default().fg(DEFAULT_THEME.fg)));

    let progress = Line::from(vec![
        Span::styled(
            format!("{}/{} nodes output", step.result.len(), total_nodes),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("  ·  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{}", step.action),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(value_spans), progress])
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
