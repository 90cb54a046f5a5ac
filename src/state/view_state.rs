//! Presentation layer: the trait the controller drives and the concrete
//! render-facing state the TUI draws from

use super::field::FieldId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long the success modal stays open before closing itself
pub const SUCCESS_MODAL_AUTO_CLOSE: Duration = Duration::from_secs(3);

/// Per-field visual state class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Which sub-view the upload zone shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadView {
    Empty,
    Selected { file_name: String },
}

/// An open modal dialog
#[derive(Debug, Clone)]
pub enum Modal {
    Success { opened_at: Instant },
    Error { message: String },
}

/// Operations the form controller needs from the presentation layer,
/// enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait FormPresenter {
    /// Set a field's inline error text and make it visible
    fn show_field_error(&mut self, field: FieldId, message: &str);

    /// Clear a field's inline error text
    fn clear_field_error(&mut self, field: FieldId);

    /// Toggle a field's success/error visual class
    fn set_field_status(&mut self, field: FieldId, status: FieldStatus);

    /// Toggle the drag-over highlight on the upload zone
    fn set_drag_active(&mut self, active: bool);

    /// Switch the upload zone to the file-selected sub-view
    fn show_file_selected(&mut self, file_name: &str);

    /// Switch the upload zone back to the empty sub-view
    fn show_upload_empty(&mut self);

    /// Open the success dialog
    fn open_success_modal(&mut self);

    /// Open the error dialog with a message
    fn open_error_modal(&mut self, message: &str);

    /// Dismiss whichever dialog is open
    fn close_modal(&mut self);

    /// Toggle the submit control between idle and busy/disabled
    fn set_submit_busy(&mut self, busy: bool);
}

/// Concrete presenter: plain state mutated by the controller and read by the
/// renderer every frame
#[derive(Debug)]
pub struct ViewState {
    field_errors: HashMap<FieldId, String>,
    field_status: HashMap<FieldId, FieldStatus>,
    pub drag_active: bool,
    pub upload_view: UploadView,
    pub modal: Option<Modal>,
    pub submit_busy: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            field_errors: HashMap::new(),
            field_status: HashMap::new(),
            drag_active: false,
            upload_view: UploadView::Empty,
            modal: None,
            submit_busy: false,
        }
    }
}

impl ViewState {
    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn field_status(&self, field: FieldId) -> FieldStatus {
        self.field_status.get(&field).copied().unwrap_or_default()
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    /// Advance time-driven presentation: auto-close the success modal
    pub fn tick(&mut self) {
        if let Some(Modal::Success { opened_at }) = &self.modal {
            if opened_at.elapsed() >= SUCCESS_MODAL_AUTO_CLOSE {
                self.modal = None;
            }
        }
    }
}

impl FormPresenter for ViewState {
    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.field_errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.field_errors.remove(&field);
    }

    fn set_field_status(&mut self, field: FieldId, status: FieldStatus) {
        if status == FieldStatus::Neutral {
            self.field_status.remove(&field);
        } else {
            self.field_status.insert(field, status);
        }
    }

    fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    fn show_file_selected(&mut self, file_name: &str) {
        self.upload_view = UploadView::Selected {
            file_name: file_name.to_string(),
        };
    }

    fn show_upload_empty(&mut self) {
        self.upload_view = UploadView::Empty;
    }

    fn open_success_modal(&mut self) {
        self.modal = Some(Modal::Success {
            opened_at: Instant::now(),
        });
    }

    fn open_error_modal(&mut self, message: &str) {
        self.modal = Some(Modal::Error {
            message: message.to_string(),
        });
    }

    fn close_modal(&mut self) {
        self.modal = None;
    }

    fn set_submit_busy(&mut self, busy: bool) {
        self.submit_busy = busy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_set_and_clear() {
        let mut view = ViewState::default();
        assert!(view.field_error(FieldId::Name).is_none());

        view.show_field_error(FieldId::Name, "This field is required.");
        assert_eq!(view.field_error(FieldId::Name), Some("This field is required."));
        assert_eq!(view.error_count(), 1);

        view.clear_field_error(FieldId::Name);
        assert!(view.field_error(FieldId::Name).is_none());
        assert_eq!(view.error_count(), 0);
    }

    #[test]
    fn test_neutral_status_removes_entry() {
        let mut view = ViewState::default();
        view.set_field_status(FieldId::CompanyEmail, FieldStatus::Success);
        assert_eq!(view.field_status(FieldId::CompanyEmail), FieldStatus::Success);
        view.set_field_status(FieldId::CompanyEmail, FieldStatus::Neutral);
        assert_eq!(view.field_status(FieldId::CompanyEmail), FieldStatus::Neutral);
    }

    #[test]
    fn test_upload_sub_views() {
        let mut view = ViewState::default();
        assert_eq!(view.upload_view, UploadView::Empty);
        view.show_file_selected("invoice.pdf");
        assert_eq!(
            view.upload_view,
            UploadView::Selected {
                file_name: "invoice.pdf".to_string()
            }
        );
        view.show_upload_empty();
        assert_eq!(view.upload_view, UploadView::Empty);
    }

    #[test]
    fn test_error_modal_holds_message() {
        let mut view = ViewState::default();
        view.open_error_modal("boom");
        assert!(view.modal_open());
        match &view.modal {
            Some(Modal::Error { message }) => assert_eq!(message, "boom"),
            other => panic!("expected error modal, got {other:?}"),
        }
        view.close_modal();
        assert!(!view.modal_open());
    }

    #[test]
    fn test_tick_closes_expired_success_modal() {
        let mut view = ViewState::default();
        view.modal = Some(Modal::Success {
            opened_at: Instant::now() - Duration::from_secs(4),
        });
        view.tick();
        assert!(!view.modal_open());
    }

    #[test]
    fn test_tick_keeps_fresh_success_modal() {
        let mut view = ViewState::default();
        view.open_success_modal();
        view.tick();
        assert!(view.modal_open());
    }

    #[test]
    fn test_tick_never_closes_error_modal() {
        let mut view = ViewState::default();
        view.open_error_modal("kept");
        view.tick();
        assert!(view.modal_open());
    }
}
