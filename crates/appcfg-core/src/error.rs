//! Error types for the configuration store

use appcfg_models::{RegistryError, UnknownModelError};
use appcfg_tree::TreeError;

/// Top-level configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppConfigError {
    /// Configuration tree could not be built
    #[error("configuration is invalid: {0}")]
    Tree(#[from] TreeError),

    /// Model registry failed validation
    #[error("model registry is invalid: {0}")]
    Registry(#[from] RegistryError),

    /// Internal lookup of a model that must exist
    #[error(transparent)]
    UnknownModel(#[from] UnknownModelError),

    /// The user picked a model that is not registered
    #[error("invalid model selection: '{}' is not an available model", .0.model_id())]
    InvalidModelSelection(#[source] UnknownModelError),
}

impl AppConfigError {
    /// Check if the error stems from user input rather than a broken build
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidModelSelection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selection_names_the_model() {
        let err = AppConfigError::InvalidModelSelection(UnknownModelError::new("foo/bar"));
        assert_eq!(
            err.to_string(),
            "invalid model selection: 'foo/bar' is not an available model"
        );
        assert!(err.is_user_error());
    }

    #[test]
    fn unknown_model_is_transparent() {
        let err: AppConfigError = UnknownModelError::new("foo/bar").into();
        assert_eq!(err.to_string(), "unknown model 'foo/bar'");
        assert!(!err.is_user_error());
    }
}
