//! Errors reported by the structural check and JSON interchange

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormConfigError {
    #[error("form title is empty")]
    EmptyTitle,

    #[error("field #{index} has no label")]
    MissingLabel { index: usize },

    #[error("field '{label}' has unrecognized type '{field_type}'")]
    UnrecognizedFieldType { label: String, field_type: String },

    #[error("invalid form JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read form file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
