//! Validation rules for the contact form

use super::field::{FieldId, FormField, InputKind};
use super::snapshot::FormSnapshot;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `local-part@domain.tld` shape, no further normalization
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email shape regex")
});

/// Reasons a submit gesture is rejected before anything is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Ver snill og fyll ut alle påkravde felt.")]
    MissingRequired,
    #[error("Ver snill og oppgje ein gyldig e-postadresse.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Outcome of one validation pass over a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub fields: Vec<(FieldId, bool)>,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    /// Validate a snapshot; required fields are checked before the email shape
    pub fn of(snapshot: &FormSnapshot) -> Self {
        let required = [
            (FieldId::Name, snapshot.name()),
            (FieldId::Email, snapshot.email()),
            (FieldId::Phone, snapshot.phone()),
            (FieldId::Description, snapshot.description()),
        ];

        let mut fields: Vec<(FieldId, bool)> = required
            .iter()
            .map(|(id, value)| (*id, !value.is_empty()))
            .collect();
        let missing = fields.iter().any(|(_, ok)| !ok);

        let email_ok = is_valid_email(snapshot.email());
        if let Some(entry) = fields.iter_mut().find(|(id, _)| *id == FieldId::Email) {
            entry.1 = entry.1 && email_ok;
        }

        let error = if missing {
            Some(ValidationError::MissingRequired)
        } else if !email_ok {
            Some(ValidationError::InvalidEmail)
        } else {
            None
        };

        Self { fields, error }
    }

    #[cfg(test)]
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }

    /// User-facing message for a failed pass
    pub fn message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Fields that failed this pass, in page order
    pub fn failing_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().filter(|(_, ok)| !ok).map(|(id, _)| *id)
    }

    #[cfg(test)]
    pub fn is_field_valid(&self, id: FieldId) -> bool {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, ok)| *ok)
            .unwrap_or(true)
    }
}

/// Check a single field and update its invalid marker
pub fn validate_field(field: &mut FormField) -> bool {
    let value = field.as_text().trim();

    let valid = if field.required && field.kind != InputKind::Checkbox && value.is_empty() {
        false
    } else {
        !(field.kind == InputKind::Email && !value.is_empty() && !is_valid_email(value))
    };

    field.invalid = !valid;
    if !valid {
        tracing::debug!("Field {} failed validation", field.id.as_str());
    }
    valid
}
