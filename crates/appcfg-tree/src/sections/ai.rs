//! AI model settings
//!
//! Holds the validated [`ModelRegistry`] together with the generation
//! parameters. The default model must be registered, checked in
//! [`AiSettings::new`].

use appcfg_models::{catalog, ModelDescriptor, ModelRegistry, UnknownModelError};

use crate::error::TreeError;
use crate::value::{ConfigNode, ConfigValue, Section};

/// Model routing and generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct AiSettings {
    default_model: String,
    models: ModelRegistry,
    default_temperature: f64,
    max_tokens: u32,
    truncation_recovery_max_tokens: u32,
}

impl AiSettings {
    const KEYS: [&'static str; 7] = [
        "defaultModel",
        "availableModels",
        "modelDisplayNames",
        "modelApiConfig",
        "defaultTemperature",
        "maxTokens",
        "truncationRecoveryMaxTokens",
    ];

    /// Settings over `models` with `default_model` preselected
    ///
    /// # Errors
    /// Returns [`TreeError::UnknownDefaultModel`] if `default_model` is not
    /// in `models`.
    pub fn new(models: ModelRegistry, default_model: impl Into<String>) -> Result<Self, TreeError> {
        let default_model = default_model.into();
        if !models.contains(&default_model) {
            return Err(TreeError::UnknownDefaultModel(default_model));
        }
        Ok(Self {
            default_model,
            models,
            default_temperature: 0.7,
            max_tokens: 8000,
            truncation_recovery_max_tokens: 4000,
        })
    }

    /// Built-in catalog with its default model
    ///
    /// # Errors
    /// Returns error if the built-in catalog fails validation
    pub fn builtin() -> Result<Self, TreeError> {
        Self::new(catalog::builtin_registry()?, catalog::DEFAULT_MODEL)
    }

    /// With sampling temperature
    #[inline]
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.default_temperature = temperature;
        self
    }

    /// With completion token limits
    #[inline]
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32, truncation_recovery_max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self.truncation_recovery_max_tokens = truncation_recovery_max_tokens;
        self
    }

    /// Identifier preselected in the model selector
    #[inline]
    #[must_use]
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Descriptor of the default model
    ///
    /// Cannot fail for settings built through [`AiSettings::new`]; the
    /// `Result` keeps the registry's error type at the call site.
    ///
    /// # Errors
    /// Returns [`UnknownModelError`] if the default is not registered
    pub fn default_descriptor(&self) -> Result<&ModelDescriptor, UnknownModelError> {
        self.models.resolve(&self.default_model)
    }

    /// Registered models
    #[inline]
    #[must_use]
    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    /// Sampling temperature for non-reasoning models
    #[inline]
    #[must_use]
    pub fn default_temperature(&self) -> f64 {
        self.default_temperature
    }

    /// Token cap for code generation
    #[inline]
    #[must_use]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Token cap when recovering a truncated response
    #[inline]
    #[must_use]
    pub fn truncation_recovery_max_tokens(&self) -> u32 {
        self.truncation_recovery_max_tokens
    }
}

impl ConfigNode for AiSettings {
    fn keys(&self) -> Vec<&str> {
        Self::KEYS.to_vec()
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "defaultModel" => Some(self.default_model.as_str().into()),
            "availableModels" => Some(ConfigValue::List(
                self.models.ids().map(ConfigValue::Text).collect(),
            )),
            "modelDisplayNames" => Some(Section::ModelDisplayNames(&self.models).into()),
            "modelApiConfig" => Some(Section::ModelApiConfig(&self.models).into()),
            "defaultTemperature" => Some(self.default_temperature.into()),
            "maxTokens" => Some(self.max_tokens.into()),
            "truncationRecoveryMaxTokens" => Some(self.truncation_recovery_max_tokens.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appcfg_models::{Provider, RegistryBuilder};

    fn tiny_registry() -> ModelRegistry {
        RegistryBuilder::new()
            .available("zai/glm-4.7")
            .display_name("zai/glm-4.7", "GLM 4.7 (Z.AI)")
            .dispatch("zai/glm-4.7", Provider::Zai, "glm-4.7")
            .build()
            .unwrap()
    }

    #[test]
    fn new_rejects_unregistered_default() {
        let result = AiSettings::new(tiny_registry(), "google/gemini-3-flash");
        assert_eq!(
            result.unwrap_err(),
            TreeError::UnknownDefaultModel("google/gemini-3-flash".into())
        );
    }

    #[test]
    fn builtin_defaults() {
        let ai = AiSettings::builtin().unwrap();
        assert_eq!(ai.default_model(), "google/gemini-3-flash");
        assert!((ai.default_temperature() - 0.7).abs() < f64::EPSILON);
        assert_eq!(ai.max_tokens(), 8000);
        assert_eq!(ai.truncation_recovery_max_tokens(), 4000);
        assert_eq!(ai.default_descriptor().unwrap().provider(), Provider::Google);
    }

    #[test]
    fn registry_views() {
        let ai = AiSettings::new(tiny_registry(), "zai/glm-4.7").unwrap();

        let names = ai.child("modelDisplayNames").unwrap().as_section().unwrap();
        assert_eq!(names.child("zai/glm-4.7"), Some(ConfigValue::Text("GLM 4.7 (Z.AI)")));
        assert_eq!(names.child("nope"), None);

        let api = ai.child("modelApiConfig").unwrap().as_section().unwrap();
        let entry = api.child("zai/glm-4.7").unwrap().as_section().unwrap();
        assert_eq!(entry.child("provider"), Some(ConfigValue::Text("zai")));
        assert_eq!(entry.child("model"), Some(ConfigValue::Text("glm-4.7")));
    }

    #[test]
    fn available_models_list() {
        let ai = AiSettings::new(tiny_registry(), "zai/glm-4.7").unwrap();
        let list = ai.child("availableModels").unwrap();
        assert_eq!(list, ConfigValue::List(vec![ConfigValue::Text("zai/glm-4.7")]));
    }

    #[test]
    fn builders_override_limits() {
        let ai = AiSettings::new(tiny_registry(), "zai/glm-4.7")
            .unwrap()
            .with_temperature(0.2)
            .with_max_tokens(100, 50);
        assert_eq!(ai.child("maxTokens"), Some(ConfigValue::Integer(100)));
        assert_eq!(ai.child("truncationRecoveryMaxTokens"), Some(ConfigValue::Integer(50)));
        assert_eq!(ai.child("defaultTemperature"), Some(ConfigValue::Float(0.2)));
    }
}
