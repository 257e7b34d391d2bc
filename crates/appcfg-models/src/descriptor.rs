//! Model descriptors and dispatch descriptors

use serde::Serialize;

use crate::provider::{ModelTier, Provider};

/// Everything the assistant knows about one selectable model
///
/// Only built by [`RegistryBuilder`](crate::RegistryBuilder), so every
/// descriptor in a registry has a display name and a dispatch target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    id: String,
    display_name: String,
    provider: Provider,
    api_model_name: String,
    tier: ModelTier,
}

impl ModelDescriptor {
    pub(crate) fn new(
        id: String,
        display_name: String,
        provider: Provider,
        api_model_name: String,
        tier: ModelTier,
    ) -> Self {
        Self {
            id,
            display_name,
            provider,
            api_model_name,
            tier,
        }
    }

    /// Human-facing identifier, e.g. `zai/glm-4.7`
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name shown in the model selector
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Provider client the request goes through
    #[inline]
    #[must_use]
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Model name sent to the provider API
    #[inline]
    #[must_use]
    pub fn api_model_name(&self) -> &str {
        &self.api_model_name
    }

    /// Informational pricing class
    #[inline]
    #[must_use]
    pub fn tier(&self) -> ModelTier {
        self.tier
    }

    /// Routing pair handed to the provider client
    #[inline]
    #[must_use]
    pub fn dispatch(&self) -> DispatchDescriptor<'_> {
        DispatchDescriptor {
            provider: self.provider,
            api_model_name: &self.api_model_name,
        }
    }
}

/// Provider and concrete API model name for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDescriptor<'a> {
    /// Provider client to use
    pub provider: Provider,
    /// Model name the provider expects
    pub api_model_name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glm() -> ModelDescriptor {
        ModelDescriptor::new(
            "zai/glm-4.7".into(),
            "GLM 4.7 (Z.AI)".into(),
            Provider::Zai,
            "glm-4.7".into(),
            ModelTier::Free,
        )
    }

    #[test]
    fn dispatch_borrows_api_name() {
        let model = glm();
        let dispatch = model.dispatch();
        assert_eq!(dispatch.provider, Provider::Zai);
        assert_eq!(dispatch.api_model_name, "glm-4.7");
    }

    #[test]
    fn descriptor_serializes_camel_case() {
        let json = serde_json::to_value(glm()).unwrap();
        assert_eq!(json["displayName"], "GLM 4.7 (Z.AI)");
        assert_eq!(json["apiModelName"], "glm-4.7");
        assert_eq!(json["provider"], "zai");
        assert_eq!(json["tier"], "free");
    }
}
