//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Window title
pub const TITLE: &str = " pocketcalc ";

/// Key help shown at the bottom
pub const HELP_LINE: &str = "Enter = | Esc C | Bksp ⌫ | s x² | r √ | Ctrl+C quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Computes the screen regions: display, value, status, keypad, help
#[must_use]
pub fn layout(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Length(3), // Value
            Constraint::Length(3), // Status
            Constraint::Min(14),   // Keypad
            Constraint::Length(1), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Returns the keypad region for mouse hit testing
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area)[3]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(area, buf);
    }

    fn render_value(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::raw(self.app.value()))
            .block(
                Block::default()
                    .title(" Value ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.notice().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Span::styled(self.app.status(), style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display, value, status, keypad, help] = layout(area);
        self.render_display(display, buf);
        self.render_value(value, buf);
        self.render_status(status, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        Paragraph::new(Line::from(Span::styled(
            HELP_LINE,
            Style::default().fg(Color::DarkGray),
        )))
        .render(help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::KeypadAction;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &CalculatorApp) -> String {
        let backend = TestBackend::new(40, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_empty() {
        let content = draw(&CalculatorApp::new());
        assert!(content.contains("pocketcalc"));
        assert!(content.contains("Ready"));
        assert!(content.contains("[7]"));
    }

    #[test]
    fn test_render_expression() {
        let mut app = CalculatorApp::new();
        app.press(KeypadAction::Digit(5));
        app.press(KeypadAction::from_char('+').unwrap());
        app.press(KeypadAction::Digit(3));
        let content = draw(&app);
        assert!(content.contains("5 + 3"));
        assert!(content.contains("pending +"));
    }

    #[test]
    fn test_render_notice() {
        let mut app = CalculatorApp::new();
        for c in "7/0=".chars() {
            app.press(KeypadAction::from_char(c).unwrap());
        }
        let content = draw(&app);
        assert!(content.contains("Cannot divide by zero"));
    }

    #[test]
    fn test_keypad_area_is_inside_frame() {
        let area = Rect::new(0, 0, 40, 30);
        let keypad = keypad_area(area);
        assert!(keypad.height >= 14);
        assert!(keypad.x >= 1 && keypad.y >= 10);
    }
}
