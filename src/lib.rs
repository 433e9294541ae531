//! Form configuration - a static description of a form's title and fields
//!
//! The built-in "Sample Form" is available through [`form_config`].

mod form;

pub use form::{form_config, FieldSpec, FieldType, FormConfig, FormConfigError};
