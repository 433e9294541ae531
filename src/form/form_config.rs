//! The form description and its built-in instance

use super::error::FormConfigError;
use super::field::FieldSpec;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SAMPLE_FORM: LazyLock<FormConfig> = LazyLock::new(|| {
    let form = FormConfig::new(
        "Sample Form",
        vec![
            FieldSpec::text("Name", true),
            FieldSpec::email("Email", true),
            FieldSpec::textarea("Message", false),
        ],
    );
    tracing::debug!(
        title = %form.title,
        fields = form.fields.len(),
        "built form configuration"
    );
    form
});

/// The built-in form. Built on first access and never mutated afterwards.
pub fn form_config() -> &'static FormConfig {
    &SAMPLE_FORM
}

/// A form title paired with its fields in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Form title
    title: String,
    /// Fields in display/tab order
    fields: Vec<FieldSpec>,
}

impl FormConfig {
    /// Create a form from a title and its fields
    pub fn new(title: &str, fields: Vec<FieldSpec>) -> Self {
        Self {
            title: title.to_string(),
            fields,
        }
    }

    /// Get the form title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fields in display/tab order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// First field carrying `label`. Labels are not required to be unique.
    pub fn field(&self, label: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Fields declared as required, in display order
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Check the title, labels and field types, stopping at the first problem.
    ///
    /// Nothing here looks at submitted values; `required` is only declared.
    pub fn validate(&self) -> Result<(), FormConfigError> {
        let result = self.check();
        match &result {
            Ok(()) => tracing::trace!(title = %self.title, "form configuration is valid"),
            Err(err) => tracing::warn!(title = %self.title, "invalid form configuration: {err}"),
        }
        result
    }

    fn check(&self) -> Result<(), FormConfigError> {
        if self.title.trim().is_empty() {
            return Err(FormConfigError::EmptyTitle);
        }
        for (index, field) in self.fields.iter().enumerate() {
            if field.label.trim().is_empty() {
                return Err(FormConfigError::MissingLabel { index });
            }
            if !field.field_type.is_recognized() {
                return Err(FormConfigError::UnrecognizedFieldType {
                    label: field.label.clone(),
                    field_type: field.field_type.to_string(),
                });
            }
        }
        Ok(())
    }
}
