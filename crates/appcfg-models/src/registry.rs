//! Model registry and its validating builder
//!
//! Provides [`ModelRegistry`] for resolving model identifiers and
//! [`RegistryBuilder`] for assembling one from the three parallel tables the
//! assistant declares: the available models, their display names, and their
//! dispatch mappings.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::descriptor::ModelDescriptor;
use crate::error::{EntryTable, RegistryError, UnknownModelError};
use crate::provider::{ModelTier, Provider};

/// Validated mapping from model identifier to [`ModelDescriptor`]
///
/// Iteration follows the order the models were made available in, which is
/// the recommendation order shown in the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelDescriptor>,
}

impl ModelRegistry {
    /// Start building a registry
    #[inline]
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve an identifier to its descriptor
    ///
    /// # Errors
    /// Returns [`UnknownModelError`] if `model_id` is not registered. The raw
    /// identifier is never used as a dispatch target.
    pub fn resolve(&self, model_id: &str) -> Result<&ModelDescriptor, UnknownModelError> {
        self.models.get(model_id).ok_or_else(|| {
            tracing::warn!(model_id, "model is not registered");
            UnknownModelError::new(model_id)
        })
    }

    /// Look up an identifier without treating a miss as an error
    #[inline]
    #[must_use]
    pub fn get(&self, model_id: &str) -> Option<&ModelDescriptor> {
        self.models.get(model_id)
    }

    /// Check if identifier is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, model_id: &str) -> bool {
        self.models.contains_key(model_id)
    }

    /// Identifiers in recommendation order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Descriptors in recommendation order
    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.values()
    }

    /// Models in the free tier
    pub fn free_models(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.iter().filter(|model| model.tier().is_free())
    }

    /// Number of registered models
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModelRegistry {
    type Item = &'a ModelDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, ModelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.values()
    }
}

/// Builder that checks every available model is fully described
///
/// Entries are collected as given; nothing is checked until [`build`].
///
/// [`build`]: RegistryBuilder::build
#[derive(Debug, Default, Clone)]
pub struct RegistryBuilder {
    available: Vec<String>,
    display_names: Vec<(String, String)>,
    dispatch: Vec<(String, Provider, String)>,
    tiers: Vec<(String, ModelTier)>,
}

impl RegistryBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// List a model as available
    #[must_use]
    pub fn available(mut self, model_id: impl Into<String>) -> Self {
        self.available.push(model_id.into());
        self
    }

    /// Set the display name of a model
    #[must_use]
    pub fn display_name(mut self, model_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.display_names.push((model_id.into(), name.into()));
        self
    }

    /// Set the dispatch target of a model
    #[must_use]
    pub fn dispatch(
        mut self,
        model_id: impl Into<String>,
        provider: Provider,
        api_model_name: impl Into<String>,
    ) -> Self {
        self.dispatch
            .push((model_id.into(), provider, api_model_name.into()));
        self
    }

    /// Set the informational tier of a model (defaults to premium)
    #[must_use]
    pub fn tier(mut self, model_id: impl Into<String>, tier: ModelTier) -> Self {
        self.tiers.push((model_id.into(), tier));
        self
    }

    /// Validate the tables and build the registry
    ///
    /// # Errors
    /// Returns the first [`RegistryError`] found. Every available model must
    /// have exactly one display name and exactly one dispatch entry, and no
    /// table may describe a model that is not available.
    pub fn build(self) -> Result<ModelRegistry, RegistryError> {
        let mut display_names: HashMap<String, String> = HashMap::new();
        for (id, name) in self.display_names {
            if display_names.contains_key(&id) {
                return Err(RegistryError::DuplicateDisplayName { id });
            }
            display_names.insert(id, name);
        }

        let mut dispatch: HashMap<String, (Provider, String)> = HashMap::new();
        for (id, provider, api_model_name) in self.dispatch {
            if dispatch.contains_key(&id) {
                return Err(RegistryError::DuplicateDispatch { id });
            }
            dispatch.insert(id, (provider, api_model_name));
        }

        // Later tier entries override earlier ones.
        let mut tiers: HashMap<String, ModelTier> = self.tiers.into_iter().collect();

        let mut models = IndexMap::with_capacity(self.available.len());
        for id in self.available {
            if id.is_empty() {
                return Err(RegistryError::EmptyId);
            }
            if models.contains_key(&id) {
                return Err(RegistryError::DuplicateModel { id });
            }

            let Some(display_name) = display_names.remove(&id) else {
                return Err(RegistryError::MissingDisplayName { id });
            };
            let Some((provider, api_model_name)) = dispatch.remove(&id) else {
                return Err(RegistryError::MissingDispatch { id });
            };
            if display_name.trim().is_empty() {
                return Err(RegistryError::EmptyDisplayName { id });
            }
            if api_model_name.trim().is_empty() {
                return Err(RegistryError::EmptyApiModelName { id });
            }

            let tier = tiers.remove(&id).unwrap_or_default();
            let descriptor =
                ModelDescriptor::new(id.clone(), display_name, provider, api_model_name, tier);
            models.insert(id, descriptor);
        }

        if let Some(id) = first_key(display_names) {
            return Err(RegistryError::OrphanEntry {
                id,
                table: EntryTable::DisplayName,
            });
        }
        if let Some(id) = first_key(dispatch) {
            return Err(RegistryError::OrphanEntry {
                id,
                table: EntryTable::Dispatch,
            });
        }
        if let Some(id) = first_key(tiers) {
            return Err(RegistryError::OrphanEntry {
                id,
                table: EntryTable::Tier,
            });
        }

        tracing::debug!(models = models.len(), "model registry validated");
        Ok(ModelRegistry { models })
    }
}

/// Smallest leftover key, so orphan errors are deterministic
fn first_key<V>(leftover: HashMap<String, V>) -> Option<String> {
    leftover.into_keys().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(id: &str) -> RegistryBuilder {
        RegistryBuilder::new()
            .available(id)
            .display_name(id, "Name")
            .dispatch(id, Provider::Google, "api-name")
    }

    #[test]
    fn builder_empty_registry() {
        let registry = RegistryBuilder::new().build().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn builder_complete_entry() {
        let registry = complete("google/x").build().unwrap();
        let model = registry.resolve("google/x").unwrap();
        assert_eq!(model.display_name(), "Name");
        assert_eq!(model.provider(), Provider::Google);
        assert_eq!(model.api_model_name(), "api-name");
        assert_eq!(model.tier(), ModelTier::Premium);
    }

    #[test]
    fn builder_missing_display_name() {
        let result = RegistryBuilder::new()
            .available("a/b")
            .dispatch("a/b", Provider::Zai, "b")
            .build();
        assert_eq!(
            result,
            Err(RegistryError::MissingDisplayName { id: "a/b".into() })
        );
    }

    #[test]
    fn builder_missing_dispatch() {
        let result = RegistryBuilder::new()
            .available("a/b")
            .display_name("a/b", "B")
            .build();
        assert_eq!(
            result,
            Err(RegistryError::MissingDispatch { id: "a/b".into() })
        );
    }

    #[test]
    fn builder_duplicate_available() {
        let result = complete("a/b").available("a/b").build();
        assert_eq!(
            result,
            Err(RegistryError::DuplicateModel { id: "a/b".into() })
        );
    }

    #[test]
    fn builder_duplicate_display_name() {
        let result = complete("a/b").display_name("a/b", "Again").build();
        assert_eq!(
            result,
            Err(RegistryError::DuplicateDisplayName { id: "a/b".into() })
        );
    }

    #[test]
    fn builder_duplicate_dispatch() {
        let result = complete("a/b").dispatch("a/b", Provider::Groq, "c").build();
        assert_eq!(
            result,
            Err(RegistryError::DuplicateDispatch { id: "a/b".into() })
        );
    }

    #[test]
    fn builder_rejects_empty_id() {
        let result = RegistryBuilder::new().available("").build();
        assert_eq!(result, Err(RegistryError::EmptyId));
    }

    #[test]
    fn builder_rejects_blank_names() {
        let result = RegistryBuilder::new()
            .available("a/b")
            .display_name("a/b", "  ")
            .dispatch("a/b", Provider::Zai, "b")
            .build();
        assert_eq!(
            result,
            Err(RegistryError::EmptyDisplayName { id: "a/b".into() })
        );

        let result = RegistryBuilder::new()
            .available("a/b")
            .display_name("a/b", "B")
            .dispatch("a/b", Provider::Zai, "")
            .build();
        assert_eq!(
            result,
            Err(RegistryError::EmptyApiModelName { id: "a/b".into() })
        );
    }

    #[test]
    fn builder_rejects_orphans() {
        let result = complete("a/b").display_name("c/d", "D").build();
        assert_eq!(
            result,
            Err(RegistryError::OrphanEntry {
                id: "c/d".into(),
                table: EntryTable::DisplayName,
            })
        );

        let result = complete("a/b").dispatch("c/d", Provider::Zai, "d").build();
        assert!(matches!(
            result,
            Err(RegistryError::OrphanEntry {
                table: EntryTable::Dispatch,
                ..
            })
        ));

        let result = complete("a/b").tier("c/d", ModelTier::Free).build();
        assert!(matches!(
            result,
            Err(RegistryError::OrphanEntry {
                table: EntryTable::Tier,
                ..
            })
        ));
    }

    #[test]
    fn registry_keeps_enumeration_order() {
        let registry = complete("z/last")
            .available("a/first")
            .display_name("a/first", "First")
            .dispatch("a/first", Provider::Zai, "first")
            .build()
            .unwrap();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec!["z/last", "a/first"]);
    }

    #[test]
    fn registry_resolve_unknown() {
        let registry = complete("a/b").build().unwrap();
        let err = registry.resolve("unknown/model").unwrap_err();
        assert_eq!(err.model_id(), "unknown/model");
        assert!(registry.get("unknown/model").is_none());
        assert!(!registry.contains("unknown/model"));
    }

    #[test]
    fn registry_free_models() {
        let registry = complete("a/b")
            .available("c/d")
            .display_name("c/d", "D")
            .dispatch("c/d", Provider::OpenRouter, "d:free")
            .tier("c/d", ModelTier::Free)
            .build()
            .unwrap();
        let free: Vec<_> = registry.free_models().map(ModelDescriptor::id).collect();
        assert_eq!(free, vec!["c/d"]);
    }
}
