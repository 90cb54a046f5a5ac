//! Field rendering: bordered input, cursor, error line, state colors

use crate::state::{FieldControl, FieldStatus, FormField, ViewState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border color from focus and validation state. Focus wins over status so
/// the user always sees where input goes.
pub fn border_color(is_active: bool, status: FieldStatus) -> Color {
    if is_active {
        return Color::Cyan;
    }
    match status {
        FieldStatus::Error => Color::Red,
        FieldStatus::Success => Color::Green,
        FieldStatus::Neutral => Color::DarkGray,
    }
}

/// Draw one field slot: the bordered input plus its error line
pub fn draw_field(frame: &mut Frame, slot: Rect, field: &FormField, is_active: bool, view: &ViewState) {
    let input_area = Rect {
        height: slot.height - 1,
        ..slot
    };
    let error_area = Rect {
        y: slot.y + slot.height - 1,
        height: 1,
        ..slot
    };

    let status = view.field_status(field.id);
    let border_style = Style::default().fg(border_color(is_active, status));

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = match &field.control {
        FieldControl::Select { .. } => {
            let mut spans = vec![Span::styled(field.display_value(), text_style)];
            if is_active {
                spans.push(Span::styled(
                    "  ◂ ▸ to change",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        FieldControl::Checkbox { .. } => {
            let mut spans = vec![Span::styled(field.display_value(), text_style)];
            if is_active {
                spans.push(Span::styled(
                    "  Space to toggle",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        _ => {
            let value = field.display_value();
            if value.is_empty() && !is_active {
                Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
            } else {
                Line::from(vec![
                    Span::styled(value, text_style),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            }
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), input_area);

    draw_error_line(frame, error_area, view.field_error(field.id));
}

/// Draw a field's inline error text (blank when no error)
pub fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_color_priority() {
        assert_eq!(border_color(true, FieldStatus::Error), Color::Cyan);
        assert_eq!(border_color(false, FieldStatus::Error), Color::Red);
        assert_eq!(border_color(false, FieldStatus::Success), Color::Green);
        assert_eq!(border_color(false, FieldStatus::Neutral), Color::DarkGray);
    }
}
