//! Contact form state

use super::field::{FieldId, FormField, InputKind};
use super::snapshot::FormSnapshot;
use super::validation::validate_field;
use crate::state::message::MessageBanner;

/// Label shown on the submit control while a submission is in flight
pub const SENDING_LABEL: &str = "Sender...";

/// Default label of the submit control
pub const SUBMIT_LABEL: &str = "Send førespurnad";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The form's submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }
}

/// The contact form with its panels and banner
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    pub submit: SubmitButton,
    /// Whether the form itself is hidden (after a successful submission)
    pub hidden: bool,
    pub success_panel_visible: bool,
    pub error_panel_visible: bool,
    pub banner: MessageBanner,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|id| match id {
                FieldId::Name => FormField::text(*id, "Namn *", InputKind::Text, true),
                FieldId::Email => FormField::text(*id, "E-post *", InputKind::Email, true),
                FieldId::Phone => FormField::text(*id, "Telefon *", InputKind::Tel, true),
                FieldId::Address => {
                    FormField::text(*id, "Adresse for oppdraget", InputKind::Text, false)
                }
                FieldId::ProjectType => FormField::select(*id, "Type oppdrag"),
                FieldId::Description => FormField::text(
                    *id,
                    "Skildring av oppdraget *",
                    InputKind::TextArea,
                    true,
                ),
                FieldId::SiteVisit => FormField::checkbox(*id, "Ønskjer gratis synfaring"),
            })
            .collect();

        Self {
            fields,
            submit: SubmitButton::default(),
            hidden: false,
            success_panel_visible: false,
            error_panel_visible: false,
            banner: MessageBanner::default(),
            active_field_index: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        // Fields are built from FieldId::ALL in order
        &self.fields[Self::index_of(id)]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index_of(id)]
    }

    fn index_of(id: FieldId) -> usize {
        FieldId::ALL.iter().position(|f| *f == id).unwrap_or(0)
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == FieldId::ALL.len()
    }

    /// Id of the active field, None when the submit row is active
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    /// Capture the current values
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::new(
            self.field(FieldId::Name).as_text(),
            self.field(FieldId::Email).as_text(),
            self.field(FieldId::Phone).as_text(),
            self.field(FieldId::Address).as_text(),
            self.field(FieldId::ProjectType).as_choice(),
            self.field(FieldId::Description).as_text(),
            self.field(FieldId::SiteVisit).is_checked(),
        )
    }

    /// Validate one field and update its invalid marker
    pub fn validate_field(&mut self, id: FieldId) -> bool {
        validate_field(self.field_mut(id))
    }

    /// Clear every field value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1 // fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FieldId::ALL.len());
    }
}
