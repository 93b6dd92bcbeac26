use std::collections::HashMap;

/// Validation messages returned by the form backend, keyed by the form field
/// they apply to. Messages that target no particular field (transport
/// failures, backend outages) live in the form-wide list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: HashMap<String, Vec<String>>,
    form_wide: Vec<String>,
}

impl FieldErrors {
    pub fn form_wide(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push_form_wide(message);
        errors
    }

    pub fn push_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.by_field
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn push_form_wide(&mut self, message: impl Into<String>) {
        self.form_wide.push(message.into());
    }

    /// Messages for one field; empty slice when the field is clean.
    pub fn for_field(&self, field: &str) -> &[String] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn form_wide_messages(&self) -> &[String] {
        &self.form_wide
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty() && self.form_wide.is_empty()
    }
}
