use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Errors reported by scheme construction and role lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynamicColorError {
    /// A required scheme option was never set on the builder.
    #[error("missing required scheme option `{0}`")]
    MissingField(&'static str),
    /// No role with this name exists in the catalog.
    #[error("unknown color role `{0}`")]
    UnknownRole(String),
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    #[error("unknown platform `{0}`, expected phone or watch")]
    UnknownPlatform(String),
    #[error("unknown spec version `{0}`, expected 2021 or 2025")]
    UnknownSpecVersion(String),
    /// Following the background chain from this role leads back to it.
    #[error("color role `{0}` is its own transitive background")]
    CyclicBackground(String),
}

impl From<UninitializedFieldError> for DynamicColorError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::MissingField(err.field_name())
    }
}
