//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the current screen with ratatui and translates
//! keyboard input into application-state operations.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
