//! AI providers a request can be dispatched to
//!
//! Provides [`Provider`], the closed set of provider clients the assistant knows
//! how to route to, and [`ModelTier`], the informational pricing class.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Provider client a model request is routed through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Z.AI GLM models (OpenAI-compatible API)
    Zai,
    /// Google Gemini
    Google,
    /// Groq-hosted open models
    Groq,
    /// OpenRouter gateway (OpenAI-compatible API)
    OpenRouter,
    /// OpenAI
    OpenAi,
    /// Anthropic
    Anthropic,
}

impl Provider {
    /// All known providers
    pub const ALL: [Self; 6] = [
        Self::Zai,
        Self::Google,
        Self::Groq,
        Self::OpenRouter,
        Self::OpenAi,
        Self::Anthropic,
    ];

    /// Wire name used by provider clients
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zai => "zai",
            Self::Google => "google",
            Self::Groq => "groq",
            Self::OpenRouter => "openrouter",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = UnknownProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| UnknownProviderError(s.to_string()))
    }
}

/// Provider name did not match any known provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider: {0}")]
pub struct UnknownProviderError(pub String);

/// Pricing class shown next to a model in the selector
///
/// Purely informational. Resolution and dispatch never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    /// Usable without a paid plan
    Free,
    /// Requires a paid key
    #[default]
    Premium,
}

impl ModelTier {
    /// Check if this is the free tier
    #[inline]
    #[must_use]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_roundtrips_through_str() {
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn provider_parse_rejects_unknown() {
        let err = "bedrock".parse::<Provider>().unwrap_err();
        assert_eq!(err.to_string(), "unknown provider: bedrock");
    }

    #[test]
    fn provider_serializes_as_wire_name() {
        let json = serde_json::to_string(&Provider::OpenRouter).unwrap();
        assert_eq!(json, "\"openrouter\"");
    }

    #[test]
    fn tier_defaults_to_premium() {
        assert_eq!(ModelTier::default(), ModelTier::Premium);
        assert!(ModelTier::Free.is_free());
        assert!(!ModelTier::Premium.is_free());
    }
}
