//! UI module for the birthday TUI

pub mod layout;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use terminal::TerminalDisplay;
