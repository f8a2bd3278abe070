use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating a catalog dataset.
///
/// These never escape `Catalog::load_or_default`, which substitutes the
/// embedded defaults instead; they are surfaced only by the strict loading
/// entry points and by diagnostics.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// A string did not name any variant of a closed vocabulary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported {field} value `{value}`")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}
