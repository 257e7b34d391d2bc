//! Built-in catalog behaviour as seen by provider clients

use appcfg_models::catalog::{self, AVAILABLE_MODELS};
use appcfg_models::{ModelTier, Provider, RegistryBuilder, RegistryError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn every_available_model_resolves() {
    let registry = catalog::builtin_registry().unwrap();
    for id in AVAILABLE_MODELS {
        let model = registry.resolve(id).unwrap();
        assert_eq!(model.id(), *id);
        assert!(!model.provider().as_str().is_empty());
        assert!(!model.api_model_name().is_empty());
        assert!(!model.display_name().is_empty());
    }
}

#[test]
fn glm_dispatch() {
    let registry = catalog::builtin_registry().unwrap();
    let model = registry.resolve("zai/glm-4.7").unwrap();
    assert_eq!(model.provider(), Provider::Zai);
    assert_eq!(model.api_model_name(), "glm-4.7");
    assert_eq!(model.display_name(), "GLM 4.7 (Z.AI)");
}

#[test]
fn openrouter_keeps_nested_name_and_free_suffix() {
    let registry = catalog::builtin_registry().unwrap();
    let model = registry
        .resolve("openrouter/mistralai/mistral-7b-instruct:free")
        .unwrap();
    assert_eq!(model.provider(), Provider::OpenRouter);
    assert_eq!(model.api_model_name(), "mistralai/mistral-7b-instruct:free");
    assert_eq!(model.display_name(), "Mistral 7B (OpenRouter)");
    assert_eq!(model.tier(), ModelTier::Free);
}

#[test]
fn unknown_model_is_an_error() {
    let registry = catalog::builtin_registry().unwrap();
    let err = registry.resolve("unknown/model").unwrap_err();
    assert_eq!(err.model_id(), "unknown/model");
}

#[test]
fn provider_prefix_alone_does_not_route() {
    let registry = catalog::builtin_registry().unwrap();
    assert!(registry.resolve("zai/glm-9").is_err());
    assert!(registry.resolve("google").is_err());
    assert!(registry.resolve("").is_err());
}

#[test]
fn registry_order_matches_catalog() {
    let registry = catalog::builtin_registry().unwrap();
    let ids: Vec<_> = registry.ids().collect();
    assert_eq!(ids, AVAILABLE_MODELS.to_vec());
}

#[test]
fn tier_does_not_change_dispatch() {
    let free = RegistryBuilder::new()
        .available("a/b")
        .display_name("a/b", "B")
        .dispatch("a/b", Provider::Groq, "b")
        .tier("a/b", ModelTier::Free)
        .build()
        .unwrap();
    let premium = RegistryBuilder::new()
        .available("a/b")
        .display_name("a/b", "B")
        .dispatch("a/b", Provider::Groq, "b")
        .build()
        .unwrap();

    assert_eq!(
        free.resolve("a/b").unwrap().dispatch(),
        premium.resolve("a/b").unwrap().dispatch()
    );
}

#[test]
fn model_listed_without_dispatch_fails_to_build() {
    let result = RegistryBuilder::new()
        .available("openai/gpt-4o")
        .display_name("openai/gpt-4o", "GPT-4o")
        .build();
    assert_eq!(
        result.unwrap_err(),
        RegistryError::MissingDispatch {
            id: "openai/gpt-4o".into()
        }
    );
}

proptest! {
    #[test]
    fn prop_resolve_is_idempotent(index in 0..AVAILABLE_MODELS.len()) {
        let registry = catalog::builtin_registry().unwrap();
        let id = AVAILABLE_MODELS[index];
        let first = registry.resolve(id).unwrap().clone();
        let second = registry.resolve(id).unwrap().clone();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_unregistered_ids_never_resolve(id in "[a-z]{1,8}/[a-z0-9.-]{1,12}") {
        let registry = catalog::builtin_registry().unwrap();
        prop_assume!(!AVAILABLE_MODELS.contains(&id.as_str()));
        prop_assert!(registry.resolve(&id).is_err());
    }
}
