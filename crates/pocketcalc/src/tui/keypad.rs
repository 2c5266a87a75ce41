//! Keypad widget and mouse hit testing

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{Keypad, KeypadAction};

/// Converts a click position inside the bordered keypad area to an action
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<KeypadAction> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // border is one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (rows, cols) = keypad.dimensions();
    let btn_width = (area.width - 2) / cols as u16;
    let btn_height = (area.height - 2) / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;
    keypad.get_button_at(row, col).map(|b| b.action)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    KeypadAction::Digit(_) | KeypadAction::Decimal => {
                        Style::default().fg(Color::White)
                    }
                    KeypadAction::Operator(_) => Style::default().fg(Color::Yellow),
                    KeypadAction::Equals => Style::default().fg(Color::Green),
                    KeypadAction::Clear | KeypadAction::Backspace => {
                        Style::default().fg(Color::Red)
                    }
                    _ => Style::default().fg(Color::Cyan),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let label_width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
