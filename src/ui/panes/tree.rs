//! Tree diagram pane
//!
//! Draws the whole tree on a character grid using the inorder-rank layout,
//! then colors every node by its state in the current step: the current
//! node is highlighted, visited nodes are green, stacked nodes orange,
//! untouched nodes plain. Connector rows between node rows carry `╱`/`╲`
//! edge glyphs anchored halfway between parent and child centers.
//!
//! The grid can exceed the pane; both axes scroll, clamped to the content.

use super::pane_block;
use crate::engine::Step;
use crate::tree::{NodeId, Tree};
use crate::ui::layout::TreeLayout;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Scroll state for the tree pane, both axes.
#[derive(Debug, Default)]
pub struct TreeScrollState {
    pub row_offset: usize,
    pub col_offset: usize,
}

/// One character cell of the diagram grid.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    owner: Option<NodeId>,
    is_edge: bool,
}

const EMPTY_CELL: Cell = Cell {
    ch: ' ',
    owner: None,
    is_edge: false,
};

/// Render the tree pane.
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &Tree,
    layout: &TreeLayout,
    step: &Step,
    is_focused: bool,
    scroll: &mut TreeScrollState,
) {
    let block = pane_block(" Tree ", is_focused);

    if tree.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let grid = build_grid(tree, layout);

    // Clamp both scroll axes to the content size
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let visible_width = area.width.saturating_sub(2).max(1) as usize;
    // One grid row plus the legend underneath
    let grid_rows = visible_height.saturating_sub(2).max(1);
    scroll.row_offset = scroll
        .row_offset
        .min(layout.height().saturating_sub(grid_rows));
    scroll.col_offset = scroll
        .col_offset
        .min(layout.width().saturating_sub(visible_width));

    let mut lines: Vec<Line> = Vec::new();
    for row in grid
        .iter()
        .skip(scroll.row_offset)
        .take(grid_rows)
    {
        lines.push(row_to_line(
            row,
            scroll.col_offset,
            visible_width,
            step,
        ));
    }

    // Legend under the diagram
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(DEFAULT_THEME.node_current)),
        Span::styled("current  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("● ", Style::default().fg(DEFAULT_THEME.node_visited)),
        Span::styled("visited  ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled("● ", Style::default().fg(DEFAULT_THEME.node_on_stack)),
        Span::styled("on stack", Style::default().fg(DEFAULT_THEME.comment)),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Rasterize the tree into a grid of cells.
fn build_grid(tree: &Tree, layout: &TreeLayout) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![EMPTY_CELL; layout.width().max(1)]; layout.height().max(1)];

    for id in tree.node_ids() {
        let Some(pos) = layout.position(id) else {
            continue;
        };
        let node = tree.node(id);

        for (i, ch) in node.value.to_string().chars().enumerate() {
            if let Some(cell) = grid[pos.row].get_mut(pos.col + i) {
                *cell = Cell {
                    ch,
                    owner: Some(id),
                    is_edge: false,
                };
            }
        }

        for (child, glyph) in [(node.left, '╱'), (node.right, '╲')] {
            let Some(child) = child else { continue };
            let Some(child_pos) = layout.position(child) else {
                continue;
            };
            let anchor = (pos.center + child_pos.center) / 2;
            if let Some(cell) = grid[pos.row + 1].get_mut(anchor) {
                *cell = Cell {
                    ch: glyph,
                    owner: None,
                    is_edge: true,
                };
            }
        }
    }

    grid
}

/// Convert one grid row into a styled line, grouping equal-style runs.
fn row_to_line(row: &[Cell], col_offset: usize, width: usize, step: &Step) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for cell in row.iter().skip(col_offset).take(width) {
        let style = cell_style(cell, step);
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(cell.ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    Line::from(spans)
}

fn cell_style(cell: &Cell, step: &Step) -> Style {
    if cell.is_edge {
        return Style::default().fg(DEFAULT_THEME.edge);
    }

    match cell.owner {
        Some(id) if step.current == Some(id) => Style::default()
            .fg(DEFAULT_THEME.node_current)
            .bg(DEFAULT_THEME.node_current_bg)
            .add_modifier(Modifier::BOLD),
        Some(id) if step.is_visited(id) => Style::default().fg(DEFAULT_THEME.node_visited),
        Some(id) if step.is_on_stack(id) => Style::default().fg(DEFAULT_THEME.node_on_stack),
        Some(_) => Style::default().fg(DEFAULT_THEME.fg),
        None => Style::default(),
    }
}
