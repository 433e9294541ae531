//! Form configuration domain layer
//!
//! Declares the built-in form and the types that describe it.

mod error;
mod field;
mod form_config;
mod json;

pub use error::FormConfigError;
pub use field::{FieldSpec, FieldType};
pub use form_config::{form_config, FormConfig};
