//! Submit control: idle and busy/disabled states

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const IDLE_LABEL: &str = "Extract Invoice Data";
pub const BUSY_LABEL: &str = "Processing...";

/// Render the submit button. While busy the control is visually disabled
/// regardless of focus.
pub fn render(frame: &mut Frame, area: Rect, is_selected: bool, busy: bool) {
    let (content, text_style, border_style) = if busy {
        (
            BUSY_LABEL,
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_selected {
        (
            IDLE_LABEL,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (
            IDLE_LABEL,
            Style::default(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
