//! The invoice form controller: field validation, file intake, and the
//! submission state machine
//!
//! The controller owns the form state and drives a [`FormPresenter`] for all
//! visual feedback. Submission is split in two so the event loop never blocks
//! on the backend: [`FormController::begin_submit`] validates, flips the busy
//! state, and hands back the payload to deliver on a background task;
//! [`FormController::finish_submit`] applies the backend's verdict once it
//! resolves. `is_submitting` guards against re-entry between the two.

use crate::backend::{SubmissionPayload, SubmitResponse};
use crate::state::{
    FieldControl, FieldId, FieldStatus, FileHandle, FormPresenter, InvoiceForm, MAX_UPLOAD_BYTES,
    PDF_MIME,
};
use crate::validation::{
    check_field, FieldOutcome, MSG_FILE_MISSING, MSG_FILE_TOO_LARGE, MSG_FIX_ERRORS, MSG_NOT_PDF,
    MSG_SUBMISSION_FAILED, MSG_SUBMIT_FALLBACK,
};
use anyhow::Result;

/// Required text fields, in validation order
const REQUIRED_TEXT_FIELDS: [FieldId; 3] =
    [FieldId::Name, FieldId::CompanyName, FieldId::CompanyEmail];

/// Required selects, validated after the text fields
const SELECT_FIELDS: [FieldId; 3] = [FieldId::CompanySize, FieldId::Industry, FieldId::Country];

pub struct FormController {
    pub form: InvoiceForm,
    selected_file: Option<FileHandle>,
    is_submitting: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self {
            form: InvoiceForm::new(),
            selected_file: None,
            is_submitting: false,
        }
    }

    pub fn selected_file(&self) -> Option<&FileHandle> {
        self.selected_file.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Input into a field only clears its displayed error; the field is not
    /// revalidated until the next blur or a full-form submit.
    pub fn on_field_input(&self, id: FieldId, presenter: &mut impl FormPresenter) {
        presenter.clear_field_error(id);
    }

    /// Leaving a field validates it
    pub fn on_field_blur(&self, id: FieldId, presenter: &mut impl FormPresenter) -> bool {
        self.validate_field(id, presenter)
    }

    /// A file arrived from the picker or from a drop
    pub fn on_file_chosen(&mut self, file: FileHandle, presenter: &mut impl FormPresenter) -> bool {
        self.process_file(file, presenter)
    }

    /// Type check first, then size; a rejected file leaves the current
    /// selection untouched.
    pub fn process_file(&mut self, file: FileHandle, presenter: &mut impl FormPresenter) -> bool {
        if file.mime_type != PDF_MIME {
            presenter.show_field_error(FieldId::PdfInvoice, MSG_NOT_PDF);
            return false;
        }

        if file.size > MAX_UPLOAD_BYTES {
            presenter.show_field_error(FieldId::PdfInvoice, MSG_FILE_TOO_LARGE);
            return false;
        }

        presenter.show_file_selected(&file.name);
        presenter.clear_field_error(FieldId::PdfInvoice);
        self.selected_file = Some(file);
        true
    }

    /// Validate a single field, refreshing its error slot and visual class
    pub fn validate_field(&self, id: FieldId, presenter: &mut impl FormPresenter) -> bool {
        presenter.clear_field_error(id);
        presenter.set_field_status(id, FieldStatus::Neutral);

        match check_field(self.form.field(id)) {
            Ok(FieldOutcome::Success) => {
                presenter.set_field_status(id, FieldStatus::Success);
                true
            }
            Ok(FieldOutcome::Neutral) => true,
            Err(err) => {
                presenter.show_field_error(id, &err.to_string());
                if err.marks_field() {
                    presenter.set_field_status(id, FieldStatus::Error);
                }
                false
            }
        }
    }

    /// Validate the whole form. Every check runs; failures never short-circuit
    /// the rest, so all applicable errors show at once.
    pub fn validate_form(&self, presenter: &mut impl FormPresenter) -> bool {
        let mut is_valid = true;

        for id in REQUIRED_TEXT_FIELDS {
            if !self.validate_field(id, presenter) {
                is_valid = false;
            }
        }

        for id in SELECT_FIELDS {
            if !self.validate_field(id, presenter) {
                is_valid = false;
            }
        }

        if self.selected_file.is_none() {
            presenter.show_field_error(FieldId::PdfInvoice, MSG_FILE_MISSING);
            is_valid = false;
        }

        if !self.validate_field(FieldId::PrivacyConsent, presenter) {
            is_valid = false;
        }

        is_valid
    }

    /// Submit entry point: validate, and on a clean form flip the busy state
    /// and hand back the serialized payload for delivery. `None` while a
    /// submission is already in flight or when validation fails.
    pub fn begin_submit(&mut self, presenter: &mut impl FormPresenter) -> Option<SubmissionPayload> {
        if self.is_submitting {
            return None;
        }

        if !self.validate_form(presenter) {
            presenter.open_error_modal(MSG_FIX_ERRORS);
            return None;
        }

        // validate_form has already established the file is present
        let payload = self.payload()?;

        self.is_submitting = true;
        presenter.set_submit_busy(true);

        tracing::info!(
            fields = payload.fields.len(),
            file = %payload.file.name,
            "submitting invoice"
        );

        Some(payload)
    }

    /// Complete a submission started with [`FormController::begin_submit`]
    /// once the backend has resolved. Whatever the outcome, the busy state
    /// clears exactly once at the end.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitResponse>,
        presenter: &mut impl FormPresenter,
    ) {
        match result {
            Ok(response) if response.success => {
                presenter.open_success_modal();
                self.reset(presenter);
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| MSG_SUBMISSION_FAILED.to_string());
                tracing::warn!(%message, "backend rejected submission");
                presenter.open_error_modal(&message);
            }
            Err(err) => {
                tracing::warn!(error = %err, "invoice submission fault");
                let message = err.to_string();
                if message.is_empty() {
                    presenter.open_error_modal(MSG_SUBMIT_FALLBACK);
                } else {
                    presenter.open_error_modal(&message);
                }
            }
        }

        self.is_submitting = false;
        presenter.set_submit_busy(false);
    }

    /// Assemble the request payload: every non-checkbox, non-file field with a
    /// non-empty value, plus the file under its fixed key. `None` until a file
    /// has been selected.
    pub fn payload(&self) -> Option<SubmissionPayload> {
        let file = self.selected_file.clone()?;

        let mut fields = Vec::new();
        for id in FieldId::ALL {
            let field = self.form.field(id);
            match field.control {
                FieldControl::Checkbox { .. } | FieldControl::FilePath { .. } => continue,
                _ => {}
            }
            let value = field.value_str();
            if !value.is_empty() {
                fields.push((id.name().to_string(), value.to_string()));
            }
        }

        Some(SubmissionPayload::new(fields, file))
    }

    /// Full reset after a successful submission: state, error displays,
    /// visual classes, and the upload zone
    pub fn reset(&mut self, presenter: &mut impl FormPresenter) {
        self.form.reset();
        self.selected_file = None;

        for id in FieldId::ALL {
            presenter.clear_field_error(id);
            presenter.set_field_status(id, FieldStatus::Neutral);
        }
        presenter.show_upload_empty();
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
