//! Upload zone: empty and file-selected sub-views with drag highlight

use super::form_view;
use crate::state::{FormField, UploadView, ViewState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the upload zone slot. The zone doubles as a path input: type a path
/// and press Enter, or drop a file onto the terminal.
pub fn draw(frame: &mut Frame, slot: Rect, field: &FormField, is_active: bool, view: &ViewState) {
    let zone_area = Rect {
        height: slot.height - 1,
        ..slot
    };
    let error_area = Rect {
        y: slot.y + slot.height - 1,
        height: 1,
        ..slot
    };

    let border_style = if view.drag_active {
        Style::default().fg(Color::Yellow)
    } else if matches!(view.upload_view, UploadView::Selected { .. }) {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(form_view::border_color(
            is_active,
            view.field_status(field.id),
        ))
    };

    let lines = match &view.upload_view {
        UploadView::Selected { file_name } => vec![
            Line::from(vec![
                Span::styled("✔ ", Style::default().fg(Color::Green)),
                Span::styled(
                    file_name.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Type a new path and press Enter to replace",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        UploadView::Empty => {
            let path = field.value_str();
            let first = if path.is_empty() && !is_active {
                Line::from(Span::styled(
                    "(type a path to a PDF, or drop a file here)",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                let cursor = if is_active { "▌" } else { "" };
                Line::from(vec![
                    Span::styled(path.to_string(), Style::default().fg(Color::Cyan)),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            };
            vec![
                first,
                Line::from(Span::styled(
                    "Enter attaches the file · PDF only · max 10MB",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };

    let title = if view.drag_active {
        " PDF Invoice · drop to attach "
    } else {
        " PDF Invoice "
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), zone_area);

    form_view::draw_error_line(frame, error_area, view.field_error(field.id));
}
