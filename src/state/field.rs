//! Form field value objects

/// Identity of every field on the invoice form.
///
/// The order of [`FieldId::ALL`] is the tab order and the validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    CompanyName,
    CompanyEmail,
    CompanySize,
    Industry,
    Country,
    PdfInvoice,
    PrivacyConsent,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::Name,
        FieldId::CompanyName,
        FieldId::CompanyEmail,
        FieldId::CompanySize,
        FieldId::Industry,
        FieldId::Country,
        FieldId::PdfInvoice,
        FieldId::PrivacyConsent,
    ];

    /// Wire name used as the payload key for this field.
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::CompanyName => "companyName",
            FieldId::CompanyEmail => "companyEmail",
            FieldId::CompanySize => "companySize",
            FieldId::Industry => "industry",
            FieldId::Country => "country",
            FieldId::PdfInvoice => "pdfInvoice",
            FieldId::PrivacyConsent => "privacyConsent",
        }
    }
}

/// Tagged field kinds. One validation rule per tag; no name matching.
#[derive(Debug, Clone)]
pub enum FieldControl {
    Text { value: String },
    Email { value: String },
    Select { options: &'static [&'static str], selected: usize },
    Checkbox { checked: bool },
    FilePath { value: String },
}

/// A single form field with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    pub control: FieldControl,
    pub required: bool,
}

impl FormField {
    pub fn text(id: FieldId, label: &'static str, required: bool) -> Self {
        Self {
            id,
            label,
            control: FieldControl::Text {
                value: String::new(),
            },
            required,
        }
    }

    pub fn email(id: FieldId, label: &'static str, required: bool) -> Self {
        Self {
            id,
            label,
            control: FieldControl::Email {
                value: String::new(),
            },
            required,
        }
    }

    /// Create a select field. `options[0]` is the unselected placeholder.
    pub fn select(id: FieldId, label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            id,
            label,
            control: FieldControl::Select {
                options,
                selected: 0,
            },
            required: true,
        }
    }

    pub fn checkbox(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            control: FieldControl::Checkbox { checked: false },
            required: false,
        }
    }

    pub fn file_path(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            control: FieldControl::FilePath {
                value: String::new(),
            },
            required: false,
        }
    }

    /// Current string value (empty for checkboxes and unselected selects).
    pub fn value_str(&self) -> &str {
        match &self.control {
            FieldControl::Text { value }
            | FieldControl::Email { value }
            | FieldControl::FilePath { value } => value,
            FieldControl::Select { options, selected } => options.get(*selected).copied().unwrap_or(""),
            FieldControl::Checkbox { .. } => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.control, FieldControl::Checkbox { checked: true })
    }

    /// Push a character to the field value (text-like fields only)
    pub fn push_char(&mut self, c: char) {
        match &mut self.control {
            FieldControl::Text { value }
            | FieldControl::Email { value }
            | FieldControl::FilePath { value } => value.push(c),
            FieldControl::Select { .. } | FieldControl::Checkbox { .. } => {}
        }
    }

    /// Remove the last character from the field value (text-like fields only)
    pub fn pop_char(&mut self) {
        match &mut self.control {
            FieldControl::Text { value }
            | FieldControl::Email { value }
            | FieldControl::FilePath { value } => {
                value.pop();
            }
            FieldControl::Select { .. } | FieldControl::Checkbox { .. } => {}
        }
    }

    /// Toggle a checkbox; no-op for other kinds
    pub fn toggle(&mut self) {
        if let FieldControl::Checkbox { checked } = &mut self.control {
            *checked = !*checked;
        }
    }

    /// Move a select to its next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldControl::Select { options, selected } = &mut self.control {
            *selected = (*selected + 1) % options.len();
        }
    }

    /// Move a select to its previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldControl::Select { options, selected } = &mut self.control {
            *selected = if *selected == 0 {
                options.len() - 1
            } else {
                *selected - 1
            };
        }
    }

    /// Clear the field value back to its empty state
    pub fn clear(&mut self) {
        match &mut self.control {
            FieldControl::Text { value }
            | FieldControl::Email { value }
            | FieldControl::FilePath { value } => value.clear(),
            FieldControl::Select { selected, .. } => *selected = 0,
            FieldControl::Checkbox { checked } => *checked = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.control {
            FieldControl::Select { options, selected } => {
                if *selected == 0 {
                    "(select)".to_string()
                } else {
                    options.get(*selected).copied().unwrap_or("").to_string()
                }
            }
            FieldControl::Checkbox { checked } => {
                if *checked { "[x]" } else { "[ ]" }.to_string()
            }
            _ => self.value_str().to_string(),
        }
    }
}
