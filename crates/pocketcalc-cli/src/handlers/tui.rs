//! Interactive terminal calculator

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocketcalc::tui::{hit_test, keypad_area, render, CalculatorApp, InputHandler, KeyCommand};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use super::state::{load_calculator, save_calculator};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Execute the tui command.
///
/// The terminal is restored even when the event loop fails; state is saved
/// only after a clean exit.
pub fn execute_tui(config: &CliConfig) -> CliResult<()> {
    let calculator = load_calculator(config.state_path())?;
    let mut app = CalculatorApp::with_calculator(calculator);

    enable_raw_mode().map_err(|e| CliError::terminal(format!("raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(CliError::terminal(format!("alternate screen: {e}")));
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(CliError::terminal(e.to_string()));
        }
    };

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().map_err(|e| CliError::terminal(e.to_string()))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| CliError::terminal(e.to_string()))?;
    terminal.show_cursor()?;

    result?;
    info!("terminal session ended");
    save_calculator(config.state_path(), app.calculator())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut CalculatorApp,
) -> CliResult<()> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            render(app, frame);
        })?;
        handle_event(app, &input_handler, &event::read()?, area);
    }

    Ok(())
}

/// Routes one terminal event to the app.
///
/// `area` is the full frame the UI was last drawn into; mouse clicks are
/// hit-tested against its keypad region.
pub fn handle_event(app: &mut CalculatorApp, input: &InputHandler, event: &Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match input.handle_key(*key) {
            KeyCommand::Press(action) => app.press(action),
            KeyCommand::Quit => app.quit(),
            KeyCommand::None => {}
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = hit_test(app.keypad(), keypad_area(area), mouse.column, mouse.row)
            {
                app.press(action);
            }
        }
        _ => {}
    }
}
