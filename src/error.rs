// ⚠️ Factory Errors
// Unknown tags are surfaced to the caller, never defaulted

use thiserror::Error;

/// Errors returned when a factory is asked for something it cannot build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// No constructor or variant is known for this tag
    #[error("unknown variant: {tag}")]
    UnknownVariant { tag: String },
}

impl FactoryError {
    pub fn unknown(tag: impl Into<String>) -> Self {
        FactoryError::UnknownVariant { tag: tag.into() }
    }
}
