//! Terminal front-end for the calculator

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyCommand};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{keypad_area, layout, render, CalculatorUI};
