//! Invoice form state and focus management

use super::field::{FieldControl, FieldId, FormField};

pub const COMPANY_SIZE_OPTIONS: &[&str] = &["", "1-10", "11-50", "51-200", "201-1000", "1000+"];

pub const INDUSTRY_OPTIONS: &[&str] = &[
    "",
    "Technology",
    "Finance",
    "Healthcare",
    "Retail",
    "Manufacturing",
    "Logistics",
    "Other",
];

pub const COUNTRY_OPTIONS: &[&str] = &[
    "",
    "United States",
    "United Kingdom",
    "Germany",
    "France",
    "Netherlands",
    "Canada",
    "Australia",
    "Other",
];

/// The fixed invoice form: eight fields plus the submit row.
///
/// Focus position `FieldId::ALL.len()` is the submit row, which has no
/// [`FormField`] behind it.
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    pub name: FormField,
    pub company_name: FormField,
    pub company_email: FormField,
    pub company_size: FormField,
    pub industry: FormField,
    pub country: FormField,
    pub pdf_invoice: FormField,
    pub privacy_consent: FormField,
    pub active_field_index: usize,
}

impl InvoiceForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldId::Name, "Your Name", true),
            company_name: FormField::text(FieldId::CompanyName, "Company Name", true),
            company_email: FormField::email(FieldId::CompanyEmail, "Company Email", true),
            company_size: FormField::select(FieldId::CompanySize, "Company Size", COMPANY_SIZE_OPTIONS),
            industry: FormField::select(FieldId::Industry, "Industry", INDUSTRY_OPTIONS),
            country: FormField::select(FieldId::Country, "Country", COUNTRY_OPTIONS),
            pdf_invoice: FormField::file_path(FieldId::PdfInvoice, "PDF Invoice"),
            privacy_consent: FormField::checkbox(
                FieldId::PrivacyConsent,
                "I accept the privacy policy",
            ),
            active_field_index: 0,
        }
    }

    /// Number of focusable positions (all fields plus the submit row)
    pub fn position_count(&self) -> usize {
        FieldId::ALL.len() + 1
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::CompanyName => &self.company_name,
            FieldId::CompanyEmail => &self.company_email,
            FieldId::CompanySize => &self.company_size,
            FieldId::Industry => &self.industry,
            FieldId::Country => &self.country,
            FieldId::PdfInvoice => &self.pdf_invoice,
            FieldId::PrivacyConsent => &self.privacy_consent,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::CompanyName => &mut self.company_name,
            FieldId::CompanyEmail => &mut self.company_email,
            FieldId::CompanySize => &mut self.company_size,
            FieldId::Industry => &mut self.industry,
            FieldId::Country => &mut self.country,
            FieldId::PdfInvoice => &mut self.pdf_invoice,
            FieldId::PrivacyConsent => &mut self.privacy_consent,
        }
    }

    /// Id of the focused field, or `None` when the submit row is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.active_field_id().map(|id| self.field(id))
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == FieldId::ALL.len()
    }

    /// Move focus to a specific field
    pub fn focus(&mut self, id: FieldId) {
        if let Some(index) = FieldId::ALL.iter().position(|f| *f == id) {
            self.active_field_index = index;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.position_count() - 1);
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.position_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.position_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Clear every field value and return focus to the first field
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.active_field_index = 0;
    }

    /// True when the focused field accepts character input
    pub fn active_field_is_text(&self) -> bool {
        self.active_field().is_some_and(|f| {
            matches!(
                f.control,
                FieldControl::Text { .. } | FieldControl::Email { .. } | FieldControl::FilePath { .. }
            )
        })
    }
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new()
    }
}
