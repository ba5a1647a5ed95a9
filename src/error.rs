//! Error type for every fallible color and gradient operation.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ColorError>;

/// Everything that can go wrong while building or reading a color.
///
/// All errors are raised synchronously where the bad input enters; nothing is
/// deferred to a later accessor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// A packed integer, byte or float component is outside its domain, or a
    /// hex/CSS string is malformed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// An alpha-dependent conversion was requested on a color without alpha.
    #[error("color has no alpha channel")]
    MissingAlpha,
    /// A compositing background carries its own alpha.
    #[error("background color must be opaque (no alpha channel)")]
    InvalidAlphaContext,
    /// A gradient needs at least two stops to interpolate between.
    #[error("gradient needs at least 2 stops, got {0}")]
    TooFewStops(usize),
}

impl ColorError {
    /// Build a [`ColorError::InvalidColor`], logging the rejection.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(%reason, "rejected color input");
        ColorError::InvalidColor(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ColorError::InvalidColor("bad".into()).to_string(),
            "invalid color: bad"
        );
        assert_eq!(
            ColorError::MissingAlpha.to_string(),
            "color has no alpha channel"
        );
        assert_eq!(
            ColorError::TooFewStops(1).to_string(),
            "gradient needs at least 2 stops, got 1"
        );
    }

    #[test]
    fn test_invalid_helper() {
        assert_eq!(
            ColorError::invalid("out of range"),
            ColorError::InvalidColor("out of range".to_string())
        );
    }
}
