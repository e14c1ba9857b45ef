use std::path::PathBuf;

use crate::foundation::tier::Tier;

/// Convenience result type used across the downgrade engine.
pub type DowngradeResult<T> = Result<T, DowngradeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DowngradeError {
    /// The input path does not exist.
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// A requested target tier that is not one of `auto`, `0.5`, `1.0`, `2.0`.
    #[error("invalid target tier: {0}")]
    InvalidTargetTier(String),

    /// The requested target is not strictly below the source tier.
    #[error("unreachable target tier: cannot go from {from} to {to}")]
    UnreachableTier {
        /// Tier detected on the input.
        from: Tier,
        /// Tier that was requested.
        to: Tier,
    },

    /// Malformed or unsupported container while loading.
    #[error("load error: {0}")]
    Load(String),

    /// Failure while encoding or writing a container.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// Invalid user-provided arguments that are not tier related.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DowngradeError {
    /// Build a [`DowngradeError::InvalidTargetTier`] value.
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTargetTier(msg.into())
    }

    /// Build a [`DowngradeError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`DowngradeError::Serialize`] value.
    pub fn serialize(msg: impl Into<String>) -> Self {
        Self::Serialize(msg.into())
    }

    /// Build a [`DowngradeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
