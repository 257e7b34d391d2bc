//! Error types for the model registry
//!
//! Two very different failures live here:
//! - [`RegistryError`]: the registry could not be built. Fatal at startup.
//! - [`UnknownModelError`]: a caller asked for a model the registry does not
//!   know. Must reach whoever chose the model, never be papered over.

/// Registry construction failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Empty model identifier
    #[error("model identifier must not be empty")]
    EmptyId,

    /// Identifier listed twice in the available models
    #[error("model '{id}' is listed more than once")]
    DuplicateModel { id: String },

    /// More than one display name for an identifier
    #[error("model '{id}' has more than one display name")]
    DuplicateDisplayName { id: String },

    /// More than one dispatch entry for an identifier
    #[error("model '{id}' has more than one dispatch entry")]
    DuplicateDispatch { id: String },

    /// Available model without a display name
    #[error("model '{id}' has no display name")]
    MissingDisplayName { id: String },

    /// Available model without a dispatch entry
    #[error("model '{id}' has no dispatch entry")]
    MissingDispatch { id: String },

    /// Display name is blank
    #[error("model '{id}' has an empty display name")]
    EmptyDisplayName { id: String },

    /// API model name is blank
    #[error("model '{id}' has an empty API model name")]
    EmptyApiModelName { id: String },

    /// Entry for a model that is not in the available list
    #[error("{table} entry for '{id}' does not match any available model")]
    OrphanEntry { id: String, table: EntryTable },
}

impl RegistryError {
    /// Identifier the failure is about, if any
    #[must_use]
    pub fn model_id(&self) -> Option<&str> {
        match self {
            Self::EmptyId => None,
            Self::DuplicateModel { id }
            | Self::DuplicateDisplayName { id }
            | Self::DuplicateDispatch { id }
            | Self::MissingDisplayName { id }
            | Self::MissingDispatch { id }
            | Self::EmptyDisplayName { id }
            | Self::EmptyApiModelName { id }
            | Self::OrphanEntry { id, .. } => Some(id),
        }
    }
}

/// Which side table an orphan entry was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTable {
    /// Display names
    DisplayName,
    /// Dispatch mappings
    Dispatch,
    /// Tier overrides
    Tier,
}

impl std::fmt::Display for EntryTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DisplayName => "display name",
            Self::Dispatch => "dispatch",
            Self::Tier => "tier",
        })
    }
}

/// Model identifier is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{model_id}'")]
pub struct UnknownModelError {
    model_id: String,
}

impl UnknownModelError {
    /// Create error for the given identifier
    #[inline]
    #[must_use]
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }

    /// Identifier that failed to resolve
    #[inline]
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_model_display() {
        let err = UnknownModelError::new("unknown/model");
        assert_eq!(err.to_string(), "unknown model 'unknown/model'");
        assert_eq!(err.model_id(), "unknown/model");
    }

    #[test]
    fn orphan_display_names_table() {
        let err = RegistryError::OrphanEntry {
            id: "x/y".into(),
            table: EntryTable::Dispatch,
        };
        assert_eq!(
            err.to_string(),
            "dispatch entry for 'x/y' does not match any available model"
        );
        assert_eq!(err.model_id(), Some("x/y"));
    }

    #[test]
    fn empty_id_has_no_model_id() {
        assert_eq!(RegistryError::EmptyId.model_id(), None);
    }
}
