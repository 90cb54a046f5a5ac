//! UI module for rendering the TUI

mod dialog;
mod form_view;
mod layout;
mod submit_button;
mod upload_zone;

pub use dialog::{error_dialog_area, success_dialog_area};
pub use layout::{FormLayout, HitTarget};

use crate::app::App;
use crate::state::{FieldId, Modal};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let form_layout = FormLayout::compute(area);

    let title = Line::from(vec![
        Span::styled(
            "Submit Invoice",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Tab moves · Enter activates · Ctrl+C quits",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let title_area = ratatui::layout::Rect::new(area.x + 2, area.y, area.width.saturating_sub(4), 1);
    if title_area.width > 0 {
        frame.render_widget(Paragraph::new(title), title_area);
    }

    for (index, (id, slot)) in form_layout.slots.iter().enumerate() {
        if slot.bottom() > area.bottom() || slot.right() > area.right() {
            continue;
        }
        let field = app.controller.form.field(*id);
        let is_active = app.controller.form.active_field_index == index;
        if *id == FieldId::PdfInvoice {
            upload_zone::draw(frame, *slot, field, is_active, &app.view);
        } else {
            form_view::draw_field(frame, *slot, field, is_active, &app.view);
        }
    }

    let submit_area = form_layout.submit_area;
    if submit_area.bottom() <= area.bottom() && submit_area.right() <= area.right() {
        submit_button::render(
            frame,
            submit_area,
            app.controller.form.is_submit_row_active(),
            app.view.submit_busy,
        );
    }

    match &app.view.modal {
        Some(Modal::Success { .. }) => dialog::render_success_dialog(frame),
        Some(Modal::Error { message }) => dialog::render_error_dialog(frame, message),
        None => {}
    }
}
