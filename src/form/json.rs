//! JSON interchange for form descriptions

use super::error::FormConfigError;
use super::form_config::FormConfig;
use std::fs;
use std::path::Path;

impl FormConfig {
    /// Parse a form from JSON. Unknown field types are accepted; run
    /// [`FormConfig::validate`] to reject them.
    pub fn from_json(content: &str) -> Result<Self, FormConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize the form as indented JSON
    pub fn to_json_pretty(&self) -> Result<String, FormConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a form from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FormConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FormConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let form = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            fields = form.fields().len(),
            "loaded form configuration"
        );
        Ok(form)
    }
}
