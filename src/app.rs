//! Application wiring: terminal events in, controller callbacks out
//!
//! Every interaction flows through one dispatcher. A focus move off a field
//! is its blur, character input is its input event, a checkbox toggle is its
//! change event, and a bracketed paste of a path is a drop onto the upload
//! zone.

use crate::backend::{spawn_submission, StubBackend, SubmitResponse};
use crate::config::TuiConfig;
use crate::controller::FormController;
use crate::state::{FieldControl, FieldId, FileHandle, FormPresenter, Modal, ViewState};
use crate::ui::{self, FormLayout, HitTarget};
use crate::validation::MSG_SUBMIT_FALLBACK;
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::path::Path;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// The form controller and its state
    pub controller: FormController,
    /// Concrete presentation layer the renderer draws from
    pub view: ViewState,
    /// Submission backend
    backend: StubBackend,
    /// Verdict channel of the submission currently running on its own task
    in_flight: Option<oneshot::Receiver<Result<SubmitResponse>>>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            controller: FormController::new(),
            view: ViewState::default(),
            backend: StubBackend::new(config.submit_delay()),
            in_flight: None,
            quit: false,
            terminal_size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Advance time-driven state: finish an in-flight submission once its
    /// task resolves, and auto-close the success modal
    pub fn tick(&mut self) {
        if let Some(mut rx) = self.in_flight.take() {
            match rx.try_recv() {
                Ok(result) => self.controller.finish_submit(result, &mut self.view),
                Err(oneshot::error::TryRecvError::Empty) => self.in_flight = Some(rx),
                Err(oneshot::error::TryRecvError::Closed) => {
                    tracing::warn!("submission task dropped before resolving");
                    self.controller
                        .finish_submit(Err(anyhow!(MSG_SUBMIT_FALLBACK)), &mut self.view);
                }
            }
        }

        self.view.tick();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.view.modal_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.view.close_modal();
            }
            return;
        }

        // the submit control is disabled while a submission is in flight
        if self.controller.is_submitting() {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => self.activate(),
            KeyCode::Left => self.cycle_select(false),
            KeyCode::Right => self.cycle_select(true),
            KeyCode::Char(c) => self.edit_char(c),
            KeyCode::Backspace => self.edit_backspace(),
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let area = self.screen_area();

        if self.view.modal_open() {
            // a click outside the dialog dismisses it
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                let dialog = match &self.view.modal {
                    Some(Modal::Success { .. }) => ui::success_dialog_area(area),
                    Some(Modal::Error { message }) => ui::error_dialog_area(area, message),
                    None => return,
                };
                if !dialog.contains(Position::new(mouse.column, mouse.row)) {
                    self.view.close_modal();
                }
            }
            return;
        }

        let form_layout = FormLayout::compute(area);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match form_layout.hit_test(mouse.column, mouse.row) {
                    Some(HitTarget::Field(index)) => {
                        if self.controller.form.active_field_index != index {
                            self.blur_active();
                            self.controller.form.set_active_field(index);
                        }
                    }
                    Some(HitTarget::Submit) => {
                        self.blur_active();
                        self.controller.form.set_active_field(FieldId::ALL.len());
                        self.submit();
                    }
                    None => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let over = form_layout
                    .upload_area()
                    .contains(Position::new(mouse.column, mouse.row));
                if over != self.view.drag_active {
                    self.view.set_drag_active(over);
                }
            }
            MouseEventKind::Up(_) => {
                if self.view.drag_active {
                    self.view.set_drag_active(false);
                }
            }
            _ => {}
        }
    }

    /// A bracketed paste is how terminals deliver a file drop: treat the
    /// pasted text as a path dropped onto the upload zone.
    pub fn handle_paste(&mut self, pasted: &str) {
        self.view.set_drag_active(false);

        if self.view.modal_open() || self.controller.is_submitting() {
            return;
        }

        let path = pasted.trim();
        if path.is_empty() {
            return;
        }

        self.controller.form.focus(FieldId::PdfInvoice);
        let field = self.controller.form.field_mut(FieldId::PdfInvoice);
        field.clear();
        for ch in path.chars() {
            field.push_char(ch);
        }

        self.attach_file(Path::new(path));
    }

    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Leaving a field validates it; checkboxes validate on change instead
    fn blur_active(&mut self) {
        if let Some(id) = self.controller.form.active_field_id() {
            if !matches!(
                self.controller.form.field(id).control,
                FieldControl::Checkbox { .. }
            ) {
                self.controller.on_field_blur(id, &mut self.view);
            }
        }
    }

    fn focus_next(&mut self) {
        self.blur_active();
        self.controller.form.next_field();
    }

    fn focus_prev(&mut self) {
        self.blur_active();
        self.controller.form.prev_field();
    }

    /// Enter activates the focused control
    fn activate(&mut self) {
        if self.controller.form.is_submit_row_active() {
            self.submit();
        } else if self.controller.form.active_field_id() == Some(FieldId::PdfInvoice) {
            self.choose_file_from_path_input();
        } else {
            self.focus_next();
        }
    }

    /// Start a submission on its own task; the dispatcher returns right away
    /// and `tick` picks up the verdict, so the busy state stays visible and
    /// events keep flowing while the backend works.
    fn submit(&mut self) {
        let Some(payload) = self.controller.begin_submit(&mut self.view) else {
            return;
        };
        self.in_flight = Some(spawn_submission(self.backend.clone(), payload));
    }

    fn cycle_select(&mut self, forward: bool) {
        let Some(id) = self.controller.form.active_field_id() else {
            return;
        };
        let field = self.controller.form.field_mut(id);
        if !matches!(field.control, FieldControl::Select { .. }) {
            return;
        }
        if forward {
            field.next_option();
        } else {
            field.prev_option();
        }
        self.controller.on_field_input(id, &mut self.view);
    }

    fn edit_char(&mut self, c: char) {
        let Some(id) = self.controller.form.active_field_id() else {
            return;
        };
        match self.controller.form.field(id).control {
            FieldControl::Checkbox { .. } => {
                if c == ' ' {
                    self.controller.form.field_mut(id).toggle();
                    // the change event validates immediately
                    self.controller.validate_field(id, &mut self.view);
                }
            }
            FieldControl::Select { .. } => {
                if c == ' ' {
                    self.cycle_select(true);
                }
            }
            _ => {
                self.controller.form.field_mut(id).push_char(c);
                self.controller.on_field_input(id, &mut self.view);
            }
        }
    }

    fn edit_backspace(&mut self) {
        let Some(id) = self.controller.form.active_field_id() else {
            return;
        };
        if self.controller.form.active_field_is_text() {
            self.controller.form.field_mut(id).pop_char();
            self.controller.on_field_input(id, &mut self.view);
        }
    }

    /// Enter on the upload zone attaches the file at the typed path
    fn choose_file_from_path_input(&mut self) {
        let path = self
            .controller
            .form
            .pdf_invoice
            .value_str()
            .trim()
            .to_string();
        if path.is_empty() {
            return;
        }
        self.attach_file(Path::new(&path));
    }

    fn attach_file(&mut self, path: &Path) {
        match FileHandle::from_path(path) {
            Ok(file) => {
                self.controller.on_file_chosen(file, &mut self.view);
            }
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "cannot attach file");
                self.view
                    .show_field_error(FieldId::PdfInvoice, &format!("Could not read file: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PDF_MIME;
    use crate::validation::{MSG_CONSENT, MSG_FIX_ERRORS, MSG_REQUIRED};
    use crossterm::event::KeyModifiers;
    use std::time::{Duration, Instant};

    fn test_app() -> App {
        app_with_delay(0)
    }

    fn app_with_delay(delay_ms: u64) -> App {
        let mut app = App::new(&TuiConfig {
            submit_delay_ms: Some(delay_ms),
        });
        app.terminal_size = Some((50, 80));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Fill every field validly and attach a small PDF
    fn fill_valid(app: &mut App) {
        for (id, text) in [
            (FieldId::Name, "Ada Lovelace"),
            (FieldId::CompanyName, "Analytical Engines Ltd"),
            (FieldId::CompanyEmail, "ada@analytical.example"),
        ] {
            for ch in text.chars() {
                app.controller.form.field_mut(id).push_char(ch);
            }
        }
        app.controller.form.company_size.next_option();
        app.controller.form.industry.next_option();
        app.controller.form.country.next_option();
        app.controller.form.privacy_consent.toggle();

        let file = FileHandle::new("invoice.pdf", PDF_MIME, 1024);
        assert!(app.controller.process_file(file, &mut app.view));
    }

    #[test]
    fn typing_updates_field_and_clears_error() {
        let mut app = test_app();
        app.view.show_field_error(FieldId::Name, MSG_REQUIRED);

        app.handle_key(key(KeyCode::Char('A')));

        assert_eq!(app.controller.form.name.value_str(), "A");
        assert!(app.view.field_error(FieldId::Name).is_none());
    }

    #[test]
    fn tab_blurs_and_validates_the_left_field() {
        let mut app = test_app();

        app.handle_key(key(KeyCode::Tab));

        assert_eq!(app.controller.form.active_field_index, 1);
        assert_eq!(app.view.field_error(FieldId::Name), Some(MSG_REQUIRED));
    }

    #[test]
    fn tabbing_past_checkbox_does_not_validate_it() {
        let mut app = test_app();
        app.controller.form.focus(FieldId::PrivacyConsent);

        app.handle_key(key(KeyCode::Tab));

        assert!(app.view.field_error(FieldId::PrivacyConsent).is_none());
        assert!(app.controller.form.is_submit_row_active());
    }

    #[test]
    fn space_toggles_checkbox_and_validates_on_change() {
        let mut app = test_app();
        app.controller.form.focus(FieldId::PrivacyConsent);

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.controller.form.privacy_consent.is_checked());
        assert!(app.view.field_error(FieldId::PrivacyConsent).is_none());

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.controller.form.privacy_consent.is_checked());
        assert_eq!(app.view.field_error(FieldId::PrivacyConsent), Some(MSG_CONSENT));
    }

    #[test]
    fn arrows_cycle_select_options() {
        let mut app = test_app();
        app.controller.form.focus(FieldId::CompanySize);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.controller.form.company_size.value_str(), "1-10");

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.controller.form.company_size.value_str(), "");
    }

    #[test]
    fn enter_on_submit_row_with_empty_form_opens_error_modal() {
        let mut app = test_app();
        app.controller.form.set_active_field(FieldId::ALL.len());

        app.handle_key(key(KeyCode::Enter));

        match &app.view.modal {
            Some(Modal::Error { message }) => assert_eq!(message, MSG_FIX_ERRORS),
            other => panic!("expected error modal, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn enter_on_submit_row_returns_before_the_backend_resolves() {
        let mut app = app_with_delay(200);
        fill_valid(&mut app);
        app.controller.form.set_active_field(FieldId::ALL.len());

        let started = Instant::now();
        app.handle_key(key(KeyCode::Enter));

        // the dispatcher hands the backend call to its own task and returns
        assert!(started.elapsed() < Duration::from_millis(100));
        assert!(app.controller.is_submitting());
        assert!(app.view.submit_busy);
    }

    #[tokio::test]
    async fn submission_stays_busy_across_ticks_until_the_verdict_arrives() {
        let mut app = app_with_delay(50);
        fill_valid(&mut app);
        app.controller.form.set_active_field(FieldId::ALL.len());

        app.handle_key(key(KeyCode::Enter));

        // form input is ignored while the backend works
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.controller.form.name.value_str(), "Ada Lovelace");

        // a second Enter starts nothing
        app.handle_key(key(KeyCode::Enter));

        // the busy state survives ticks that find no verdict yet
        app.tick();
        assert!(app.view.submit_busy);

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.controller.is_submitting() {
            assert!(Instant::now() < deadline, "submission never resolved");
            tokio::time::sleep(Duration::from_millis(10)).await;
            app.tick();
        }

        assert!(!app.view.submit_busy);
        assert!(matches!(app.view.modal, Some(Modal::Success { .. })));
        assert_eq!(app.controller.form.name.value_str(), "");
        assert!(app.controller.selected_file().is_none());
    }

    #[test]
    fn escape_dismisses_modal_and_swallows_the_key() {
        let mut app = test_app();
        app.view.open_error_modal("boom");

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.view.modal_open());

        // next key goes back to the form
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.controller.form.name.value_str(), "x");
    }

    #[test]
    fn paste_of_missing_path_reports_file_error() {
        let mut app = test_app();

        app.handle_paste("/no/such/invoice.pdf");

        let error = app.view.field_error(FieldId::PdfInvoice).unwrap();
        assert!(error.starts_with("Could not read file:"), "got: {error}");
        assert!(app.controller.selected_file().is_none());
        assert_eq!(
            app.controller.form.active_field_id(),
            Some(FieldId::PdfInvoice)
        );
    }

    #[test]
    fn click_moves_focus_and_blurs_previous_field() {
        let mut app = test_app();
        let form_layout = FormLayout::compute(app.screen_area());
        let (_, slot) = form_layout.slots[2];

        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            slot.x + 1,
            slot.y + 1,
        ));

        assert_eq!(app.controller.form.active_field_index, 2);
        assert_eq!(app.view.field_error(FieldId::Name), Some(MSG_REQUIRED));
    }

    #[test]
    fn drag_over_upload_zone_toggles_highlight() {
        let mut app = test_app();
        let form_layout = FormLayout::compute(app.screen_area());
        let zone = form_layout.upload_area();

        app.handle_mouse(mouse(
            MouseEventKind::Drag(MouseButton::Left),
            zone.x + 1,
            zone.y + 1,
        ));
        assert!(app.view.drag_active);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!app.view.drag_active);
    }

    #[test]
    fn click_outside_dialog_dismisses_it() {
        let mut app = test_app();
        app.view.open_error_modal("boom");

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));

        assert!(!app.view.modal_open());
    }

    #[test]
    fn click_inside_dialog_keeps_it_open() {
        let mut app = test_app();
        app.view.open_error_modal("boom");
        let dialog = ui::error_dialog_area(app.screen_area(), "boom");

        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            dialog.x + 1,
            dialog.y + 1,
        ));

        assert!(app.view.modal_open());
    }
}
