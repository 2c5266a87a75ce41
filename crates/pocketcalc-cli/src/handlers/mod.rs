//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains the execution logic for one command plus the
//! pure helpers it is built from.

pub mod press;
pub mod state;
pub mod tui;

pub use press::{execute_press, render_output};
pub use state::{load_calculator, save_calculator};
pub use tui::{execute_tui, handle_event};
