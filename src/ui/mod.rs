//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus,
//!   auto-play timing, tree/method switching
//! - **[`layout`]** — maps tree nodes to character-grid positions
//! - **[`panes`]** — stateless render functions for each visible pane
//!   (tree, stack, result, trace, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Tree`] and a [`Method`] and call [`App::run`] to start the event loop.
//!
//! [`Tree`]: crate::tree::Tree
//! [`Method`]: crate::engine::Method
//! [`App::run`]: app::App::run

pub mod app;
pub mod layout;
pub mod panes;
pub mod theme;

pub use app::App;
