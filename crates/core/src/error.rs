//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// The daily update rules are total and never produce one of these. Errors only
/// arise at the boundary where untyped input (text, fixtures) becomes domain
/// values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A category tag did not name any known category.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_category(tag: impl Into<String>) -> Self {
        Self::UnknownCategory(tag.into())
    }
}
