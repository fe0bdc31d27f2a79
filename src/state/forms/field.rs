//! Form field value objects

use super::snapshot::ProjectType;

/// Markup identifiers of the contact form's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Address,
    ProjectType,
    Description,
    SiteVisit,
}

impl FieldId {
    /// Field order as laid out on the page
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::ProjectType,
        FieldId::Description,
        FieldId::SiteVisit,
    ];

    /// The identifier the page markup uses for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::ProjectType => "projectType",
            Self::Description => "description",
            Self::SiteVisit => "siteVisit",
        }
    }
}

/// Kind of input control, mirrors the markup's input types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    TextArea,
    Select,
    Checkbox,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<ProjectType>),
    Checked(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub kind: InputKind,
    pub required: bool,
    /// Visual "invalid" marker
    pub invalid: bool,
}

impl FormField {
    fn new(id: FieldId, label: &str, kind: InputKind, value: FieldValue, required: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            value,
            kind,
            required,
            invalid: false,
        }
    }

    /// Create a new text-like field
    pub fn text(id: FieldId, label: &str, kind: InputKind, required: bool) -> Self {
        Self::new(id, label, kind, FieldValue::Text(String::new()), required)
    }

    /// Create a project type select with nothing chosen
    pub fn select(id: FieldId, label: &str) -> Self {
        Self::new(id, label, InputKind::Select, FieldValue::Choice(None), false)
    }

    /// Create an unchecked checkbox
    pub fn checkbox(id: FieldId, label: &str) -> Self {
        Self::new(id, label, InputKind::Checkbox, FieldValue::Checked(false), false)
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == InputKind::TextArea
    }

    /// Get the text value (empty for select and checkbox fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_choice(&self) -> Option<ProjectType> {
        match self.value {
            FieldValue::Choice(choice) => choice,
            _ => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    pub fn set_choice(&mut self, choice: Option<ProjectType>) {
        self.value = FieldValue::Choice(choice);
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.value = FieldValue::Checked(checked);
    }

    /// Push a character to the field value
    ///
    /// Returns true when the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Checked(checked) if c == ' ' => {
                *checked = !*checked;
                true
            }
            FieldValue::Choice(choice) if c == ' ' => {
                *choice = ProjectType::next_choice(*choice);
                true
            }
            _ => false,
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            _ => false,
        }
    }

    /// Step a select forwards or backwards through its options
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        match &mut self.value {
            FieldValue::Choice(choice) => {
                *choice = if forward {
                    ProjectType::next_choice(*choice)
                } else {
                    ProjectType::prev_choice(*choice)
                };
                true
            }
            _ => false,
        }
    }

    /// Reset the value to its initial state
    pub fn clear(&mut self) {
        match self.value {
            FieldValue::Text(_) => self.set_text(""),
            FieldValue::Choice(_) => self.set_choice(None),
            FieldValue::Checked(_) => self.set_checked(false),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(None) => "Vel type oppdrag".to_string(),
            FieldValue::Choice(Some(kind)) => kind.label().to_string(),
            FieldValue::Checked(true) => "[x] Ja takk".to_string(),
            FieldValue::Checked(false) => "[ ] Ja takk".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_ids() {
        let ids: Vec<&str> = FieldId::ALL.iter().map(FieldId::as_str).collect();
        assert_eq!(
            ids,
            vec!["name", "email", "phone", "address", "projectType", "description", "siteVisit"]
        );
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = FormField::text(FieldId::Name, "Namn", InputKind::Text, true);
        assert!(field.push_char('O'));
        assert!(field.push_char('k'));
        assert_eq!(field.as_text(), "Ok");
        assert!(field.pop_char());
        assert_eq!(field.as_text(), "O");
        assert!(field.pop_char());
        assert!(!field.pop_char());
    }

    #[test]
    fn test_checkbox_toggles_on_space_only() {
        let mut field = FormField::checkbox(FieldId::SiteVisit, "Synfaring");
        assert!(!field.push_char('x'));
        assert!(!field.is_checked());
        assert!(field.push_char(' '));
        assert!(field.is_checked());
        assert_eq!(field.display_value(), "[x] Ja takk");
    }

    #[test]
    fn test_select_cycles_through_options() {
        let mut field = FormField::select(FieldId::ProjectType, "Type oppdrag");
        assert_eq!(field.as_choice(), None);
        field.cycle_choice(true);
        assert_eq!(field.as_choice(), Some(ProjectType::Tak));
        field.cycle_choice(false);
        assert_eq!(field.as_choice(), None);
        field.cycle_choice(false);
        assert_eq!(field.as_choice(), Some(ProjectType::Anna));
    }

    #[test]
    fn test_clear_resets_each_kind() {
        let mut text = FormField::text(FieldId::Phone, "Telefon", InputKind::Tel, true);
        text.set_text("123");
        text.clear();
        assert_eq!(text.as_text(), "");

        let mut select = FormField::select(FieldId::ProjectType, "Type oppdrag");
        select.set_choice(Some(ProjectType::Bad));
        select.clear();
        assert_eq!(select.as_choice(), None);

        let mut checkbox = FormField::checkbox(FieldId::SiteVisit, "Synfaring");
        checkbox.set_checked(true);
        checkbox.clear();
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn test_textarea_is_multiline() {
        let field = FormField::text(FieldId::Description, "Skildring", InputKind::TextArea, true);
        assert!(field.is_multiline());
    }
}
