//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! maps key presses onto maze operations, and renders the grid.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
