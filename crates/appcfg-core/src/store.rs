//! Process-wide configuration store
//!
//! [`AppConfig::global`] builds the built-in tree on first use and hands
//! out the same `&'static` instance afterwards. Initialization completes
//! before any caller sees the reference, and nothing mutates it later, so
//! concurrent readers need no locking.

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use appcfg_models::{ModelDescriptor, ModelRegistry};
use appcfg_tree::{ConfigTree, ConfigValue, SandboxProfile, SandboxProvider, Section};

use crate::error::AppConfigError;

static GLOBAL: OnceCell<AppConfig> = OnceCell::new();

/// Read-only application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    tree: ConfigTree,
}

impl AppConfig {
    /// Shared built-in configuration, built on first call
    ///
    /// A failed build is not cached; the next call tries again and reports
    /// the same error.
    ///
    /// # Errors
    /// Returns error if the built-in tree fails validation
    pub fn global() -> Result<&'static Self, AppConfigError> {
        GLOBAL.get_or_try_init(|| {
            let config = Self::from_tree(ConfigTree::builtin()?);
            info!(
                sections = ConfigTree::section_names().count(),
                models = config.registry().len(),
                default_model = config.tree.ai().default_model(),
                "application configuration initialized"
            );
            Ok(config)
        })
    }

    /// Wrap an already built tree
    #[inline]
    #[must_use]
    pub fn from_tree(tree: ConfigTree) -> Self {
        Self { tree }
    }

    /// The underlying tree
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// Section by name
    #[inline]
    #[must_use]
    pub fn section(&self, name: &str) -> Option<Section<'_>> {
        self.tree.get(name)
    }

    /// Value at a dot-path
    #[inline]
    #[must_use]
    pub fn value(&self, path: &str) -> Option<ConfigValue<'_>> {
        self.tree.value(path)
    }

    /// Registered models
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ModelRegistry {
        self.tree.ai().models()
    }

    /// Sandbox profile for `provider`
    #[inline]
    #[must_use]
    pub fn sandbox(&self, provider: SandboxProvider) -> &SandboxProfile {
        self.tree.sandbox(provider)
    }

    /// Descriptor for a model id the caller expects to exist
    ///
    /// # Errors
    /// Returns [`AppConfigError::UnknownModel`] if `model_id` is not registered
    pub fn resolve_model(&self, model_id: &str) -> Result<&ModelDescriptor, AppConfigError> {
        Ok(self.registry().resolve(model_id)?)
    }

    /// Descriptor for the model a request should be dispatched to
    ///
    /// `None` selects the configured default model.
    ///
    /// # Errors
    /// Returns [`AppConfigError::InvalidModelSelection`] if `requested` names
    /// a model that is not registered
    pub fn select_model(&self, requested: Option<&str>) -> Result<&ModelDescriptor, AppConfigError> {
        let model_id = requested.unwrap_or_else(|| self.tree.ai().default_model());
        let model = self
            .registry()
            .resolve(model_id)
            .map_err(AppConfigError::InvalidModelSelection)?;
        debug!(
            model = model.id(),
            provider = %model.provider(),
            api_model = model.api_model_name(),
            defaulted = requested.is_none(),
            "model selected"
        );
        Ok(model)
    }
}
