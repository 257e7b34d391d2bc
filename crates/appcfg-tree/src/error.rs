//! Error types for tree construction

use appcfg_models::RegistryError;

/// Configuration tree could not be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Model registry failed validation
    #[error("model registry is invalid: {0}")]
    Registry(#[from] RegistryError),

    /// `ai.defaultModel` is not a registered model
    #[error("default model '{0}' is not registered")]
    UnknownDefaultModel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_converts() {
        let err: TreeError = RegistryError::MissingDispatch { id: "a/b".into() }.into();
        assert_eq!(
            err.to_string(),
            "model registry is invalid: model 'a/b' has no dispatch entry"
        );
    }
}
