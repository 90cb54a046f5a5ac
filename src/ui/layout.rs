//! Pure form geometry, shared by the renderer and mouse hit-testing

use crate::state::FieldId;
use ratatui::layout::{Position, Rect};

/// Rows per regular field slot (bordered input + error line)
pub const FIELD_SLOT_HEIGHT: u16 = 4;

/// Rows for the upload zone slot (taller sub-view + error line)
pub const UPLOAD_SLOT_HEIGHT: u16 = 6;

/// Submit button height (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

const FORM_MAX_WIDTH: u16 = 64;
const SUBMIT_WIDTH: u16 = 26;

/// What a screen position maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Field by its position in the tab order
    Field(usize),
    Submit,
}

/// Computed slot rectangles for one frame size
#[derive(Debug, Clone)]
pub struct FormLayout {
    pub slots: Vec<(FieldId, Rect)>,
    pub submit_area: Rect,
}

impl FormLayout {
    /// Lay the form out inside `area`: title row, one slot per field in tab
    /// order, then the submit button.
    pub fn compute(area: Rect) -> Self {
        let x = area.x + 2;
        let width = area.width.saturating_sub(4).min(FORM_MAX_WIDTH);
        let mut y = area.y + 2;

        let mut slots = Vec::with_capacity(FieldId::ALL.len());
        for id in FieldId::ALL {
            let height = if id == FieldId::PdfInvoice {
                UPLOAD_SLOT_HEIGHT
            } else {
                FIELD_SLOT_HEIGHT
            };
            slots.push((id, Rect::new(x, y, width, height)));
            y += height;
        }

        let submit_area = Rect::new(x, y, width.min(SUBMIT_WIDTH), BUTTON_HEIGHT);

        Self { slots, submit_area }
    }

    /// Upload zone slot rectangle
    pub fn upload_area(&self) -> Rect {
        self.slots
            .iter()
            .find(|(id, _)| *id == FieldId::PdfInvoice)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }

    /// Resolve a mouse position to a field or the submit button
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        for (index, (_, rect)) in self.slots.iter().enumerate() {
            if rect.contains(position) {
                return Some(HitTarget::Field(index));
            }
        }
        if self.submit_area.contains(position) {
            return Some(HitTarget::Submit);
        }
        None
    }
}
