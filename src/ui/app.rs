//! Main TUI application state and logic

use crate::engine::{traverse_with_steps, Method};
use crate::playback::Playback;
use crate::tree::build::{format_level_order, random_level_order};
use crate::tree::presets::PRESETS;
use crate::tree::Tree;
use crate::ui::layout::TreeLayout;
use crate::ui::panes::{StackScrollState, TreeScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Fastest and slowest auto-play intervals.
const MIN_PLAY_INTERVAL: Duration = Duration::from_millis(100);
const MAX_PLAY_INTERVAL: Duration = Duration::from_millis(2000);
const PLAY_INTERVAL_STEP: Duration = Duration::from_millis(100);

/// Node cap for randomly generated trees, kept at classroom scale.
const RANDOM_TREE_MAX_NODES: usize = 12;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tree,
    Stack,
    Trace,
}

impl FocusedPane {
    /// Move focus to the next pane (tree -> stack -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Tree,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Tree => FocusedPane::Trace,
            FocusedPane::Stack => FocusedPane::Tree,
            FocusedPane::Trace => FocusedPane::Stack,
        }
    }
}

/// The main application state
pub struct App {
    /// The tree being traversed
    pub tree: Tree,

    /// Diagram layout for the current tree
    pub layout: TreeLayout,

    /// The input literal the current tree was built from
    pub input: String,

    /// Selected traversal variant
    pub method: Method,

    /// Cursor over the recorded steps; replaced wholesale (sequence and
    /// position together) whenever the tree or the method changes
    pub playback: Playback,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub tree_scroll: TreeScrollState,
    pub stack_scroll: StackScrollState,
    pub trace_scroll: usize,

    /// Index of the preset the `e` key cycles to next
    pub preset_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Delay between auto-play steps
    pub play_interval: Duration,
}

impl App {
    /// Create a new app for the given tree and method
    pub fn new(tree: Tree, input: String, method: Method) -> Self {
        let layout = TreeLayout::compute(&tree);
        let playback = Playback::new(traverse_with_steps(&tree, method));

        App {
            tree,
            layout,
            input,
            method,
            playback,
            focused_pane: FocusedPane::Tree,
            tree_scroll: TreeScrollState::default(),
            stack_scroll: StackScrollState::default(),
            trace_scroll: usize::MAX,
            preset_index: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            play_interval: Duration::from_millis(800),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                if self.playback.step_forward() {
                    self.status_message = "Playing...".to_string();
                    self.trace_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-line status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: tree + result; right column: stack + trace
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        let step = self.playback.current().clone();

        super::panes::render_tree_pane(
            frame,
            left_rows[0],
            &self.tree,
            &self.layout,
            &step,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_result_pane(frame, left_rows[1], &step, self.tree.len(), false);

        super::panes::render_stack_pane(
            frame,
            right_rows[0],
            &step,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            right_rows[1],
            self.playback.steps(),
            self.playback.position(),
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.position(),
            self.playback.len(),
            self.method,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap() as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.step_forward() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.trace_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tree => {
                    self.tree_scroll.row_offset = self.tree_scroll.row_offset.saturating_sub(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tree => {
                    self.tree_scroll.row_offset = self.tree_scroll.row_offset.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_add(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll = self.trace_scroll.saturating_add(1);
                }
            },
            // Horizontal scroll for wide trees
            KeyCode::Char(',') => {
                if self.focused_pane == FocusedPane::Tree {
                    self.tree_scroll.col_offset = self.tree_scroll.col_offset.saturating_sub(4);
                }
            }
            KeyCode::Char('.') => {
                if self.focused_pane == FocusedPane::Tree {
                    self.tree_scroll.col_offset = self.tree_scroll.col_offset.saturating_add(4);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.play_interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.play_interval =
                    (self.play_interval.saturating_sub(PLAY_INTERVAL_STEP)).max(MIN_PLAY_INTERVAL);
                self.status_message =
                    format!("Speed: {}ms/step", self.play_interval.as_millis());
            }
            KeyCode::Char('-') => {
                self.play_interval =
                    (self.play_interval + PLAY_INTERVAL_STEP).min(MAX_PLAY_INTERVAL);
                self.status_message =
                    format!("Speed: {}ms/step", self.play_interval.as_millis());
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.set_method(self.method.toggled());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let entries =
                    random_level_order(&mut rand::thread_rng(), RANDOM_TREE_MAX_NODES);
                let literal = format_level_order(&entries);
                self.load_tree(Tree::from_level_order(&entries), literal);
                self.status_message = format!("Random tree: {}", self.input);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.preset_index = (self.preset_index + 1) % PRESETS.len();
                let preset = PRESETS[self.preset_index];
                match crate::parser::parse_level_order(preset.input) {
                    Ok(entries) => {
                        self.load_tree(
                            Tree::from_level_order(&entries),
                            preset.input.to_string(),
                        );
                        self.status_message =
                            format!("Example '{}': {}", preset.name, preset.input);
                    }
                    Err(e) => {
                        self.status_message = format!("Bad preset: {}", e);
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to end of the trace
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.trace_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump back to the first step
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.trace_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        if self.playback.step_forward() {
            self.status_message = "Stepped forward".to_string();
            self.trace_scroll = usize::MAX;
        } else {
            self.status_message = "Already at the end of the trace".to_string();
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        if self.playback.step_backward() {
            self.status_message = "Stepped backward".to_string();
            self.trace_scroll = usize::MAX;
        } else {
            self.status_message = "Already at the start of the trace".to_string();
        }
    }

    /// Switch traversal variant, re-tracing the current tree.
    fn set_method(&mut self, method: Method) {
        self.is_playing = false;
        self.method = method;
        // Sequence and cursor are replaced in one assignment
        self.playback = Playback::new(traverse_with_steps(&self.tree, self.method));
        self.trace_scroll = usize::MAX;
        self.status_message = format!("Switched to {} traversal", self.method);
    }

    /// Replace the tree, rebuilding layout and trace from scratch.
    fn load_tree(&mut self, tree: Tree, input: String) {
        self.is_playing = false;
        self.tree = tree;
        self.input = input;
        self.layout = TreeLayout::compute(&self.tree);
        self.playback = Playback::new(traverse_with_steps(&self.tree, self.method));
        self.tree_scroll = TreeScrollState::default();
        self.stack_scroll = StackScrollState::default();
        self.trace_scroll = usize::MAX;
    }
}
