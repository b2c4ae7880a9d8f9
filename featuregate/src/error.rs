//! Error types for the entitlement crate.

/// Entitlement-specific errors.
///
/// Evaluation itself is total; these only arise when constructing gated
/// features or parsing wire input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Feature display name was empty.
    #[error("feature name must not be empty")]
    EmptyFeatureName,

    /// A gated feature was declared with no accepted tiers.
    #[error("feature {0:?} accepts no license tiers")]
    EmptyTierSet(String),

    /// Unrecognized license tier name.
    #[error("unknown license tier {0:?}")]
    UnknownTier(String),

    /// License document JSON is malformed or missing required fields.
    #[error("invalid license document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Result type for entitlement operations.
pub type Result<T> = std::result::Result<T, Error>;
