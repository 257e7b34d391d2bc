//! Built-in model catalog
//!
//! The three tables below are declared separately, the way the selector,
//! the UI and the provider clients each think about models, and are joined
//! by [`builtin_registry`]. Adding a model to [`AVAILABLE_MODELS`] without
//! the matching rows makes startup fail.

use crate::error::RegistryError;
use crate::provider::{ModelTier, Provider};
use crate::registry::{ModelRegistry, RegistryBuilder};

/// Model used when the user has not picked one
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash";

/// Selectable models, in recommendation order
pub const AVAILABLE_MODELS: &[&str] = &[
    "zai/glm-4.7",
    "zai/glm-4.5-air",
    "google/gemini-3-flash",
    "google/gemini-3-flash-preview",
    "google/gemini-2.5-flash",
    "google/gemini-2.5-pro",
    "google/gemini-2.0-flash",
    "google/gemini-2.0-flash-exp",
    "openrouter/google/gemini-3-flash:free",
    "openrouter/google/gemini-2.0-flash-exp:free",
    "openrouter/meta-llama/llama-3.1-70b-instruct:free",
    "openrouter/mistralai/mistral-7b-instruct:free",
    "openai/gpt-4o",
    "anthropic/claude-sonnet-4-20250514",
    "moonshotai/kimi-k2-instruct-0905",
];

/// Selector labels
pub const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("zai/glm-4.7", "GLM 4.7 (Z.AI)"),
    ("zai/glm-4.5-air", "GLM 4.5 Air (Z.AI)"),
    ("google/gemini-3-flash", "Gemini 3 Flash"),
    ("google/gemini-3-flash-preview", "Gemini 3 Flash Preview"),
    ("google/gemini-2.5-flash", "Gemini 2.5 Flash"),
    ("google/gemini-2.5-pro", "Gemini 2.5 Pro"),
    ("google/gemini-2.0-flash", "Gemini 2.0 Flash"),
    ("google/gemini-2.0-flash-exp", "Gemini 2.0 Flash Exp"),
    ("openrouter/google/gemini-3-flash:free", "Gemini 3 Flash (OpenRouter)"),
    ("openrouter/google/gemini-2.0-flash-exp:free", "Gemini 2.0 Flash (OpenRouter)"),
    ("openrouter/meta-llama/llama-3.1-70b-instruct:free", "Llama 3.1 70B (OpenRouter)"),
    ("openrouter/mistralai/mistral-7b-instruct:free", "Mistral 7B (OpenRouter)"),
    ("openai/gpt-4o", "GPT-4o"),
    ("anthropic/claude-sonnet-4-20250514", "Claude Sonnet 4"),
    ("moonshotai/kimi-k2-instruct-0905", "Kimi K2 (Groq)"),
];

/// Provider routing
///
/// Several Gemini aliases intentionally share one API model name.
pub const DISPATCH: &[(&str, Provider, &str)] = &[
    ("zai/glm-4.7", Provider::Zai, "glm-4.7"),
    ("zai/glm-4.5-air", Provider::Zai, "glm-4.5-air"),
    ("google/gemini-3-flash", Provider::Google, "gemini-2.0-flash"),
    ("google/gemini-3-flash-preview", Provider::Google, "gemini-2.0-flash-exp"),
    ("google/gemini-2.5-flash", Provider::Google, "gemini-2.0-flash"),
    ("google/gemini-2.5-pro", Provider::Google, "gemini-1.5-pro"),
    ("google/gemini-2.0-flash", Provider::Google, "gemini-2.0-flash"),
    ("google/gemini-2.0-flash-exp", Provider::Google, "gemini-2.0-flash-exp"),
    ("moonshotai/kimi-k2-instruct-0905", Provider::Groq, "moonshotai/kimi-k2-instruct-0905"),
    ("openrouter/google/gemini-3-flash:free", Provider::OpenRouter, "google/gemini-2.0-flash-exp:free"),
    ("openrouter/google/gemini-2.0-flash-exp:free", Provider::OpenRouter, "google/gemini-2.0-flash-exp:free"),
    ("openrouter/meta-llama/llama-3.1-70b-instruct:free", Provider::OpenRouter, "meta-llama/llama-3.1-70b-instruct:free"),
    ("openrouter/mistralai/mistral-7b-instruct:free", Provider::OpenRouter, "mistralai/mistral-7b-instruct:free"),
    ("openai/gpt-4o", Provider::OpenAi, "gpt-4o"),
    ("anthropic/claude-sonnet-4-20250514", Provider::Anthropic, "claude-sonnet-4-20250514"),
];

/// Models usable without a paid plan; everything else is premium
pub const FREE_MODELS: &[&str] = &[
    "zai/glm-4.7",
    "zai/glm-4.5-air",
    "google/gemini-2.0-flash",
    "openrouter/google/gemini-3-flash:free",
    "openrouter/google/gemini-2.0-flash-exp:free",
    "openrouter/meta-llama/llama-3.1-70b-instruct:free",
    "openrouter/mistralai/mistral-7b-instruct:free",
];

/// Build and validate the built-in registry
///
/// # Errors
/// Returns [`RegistryError`] if the tables above disagree.
pub fn builtin_registry() -> Result<ModelRegistry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    for id in AVAILABLE_MODELS {
        builder = builder.available(*id);
    }
    for (id, name) in DISPLAY_NAMES {
        builder = builder.display_name(*id, *name);
    }
    for (id, provider, api_model_name) in DISPATCH {
        builder = builder.dispatch(*id, *provider, *api_model_name);
    }
    for id in FREE_MODELS {
        builder = builder.tier(*id, ModelTier::Free);
    }
    builder.build()
}
