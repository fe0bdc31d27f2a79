//! Form domain layer
//!
//! Type-safe handling of the contact form: field values, the immutable
//! submit-time snapshot and the validation rules.

mod contact_form;
mod field;
mod snapshot;
mod validation;

pub use contact_form::{ContactForm, Form, SENDING_LABEL};
pub use field::{FieldId, FormField, InputKind};
pub use snapshot::FormSnapshot;
pub use validation::ValidationResult;

#[cfg(test)]
pub use contact_form::SUBMIT_LABEL;
#[cfg(test)]
pub use snapshot::ProjectType;
#[cfg(test)]
pub use validation::ValidationError;
