//! Testing utilities for appcfg workspace
//!
//! Shared fixture registries and trees.

#![allow(missing_docs)]

pub mod fixtures {
    use std::num::NonZeroU32;

    use appcfg_models::{ModelRegistry, ModelTier, Provider, RegistryBuilder};
    use appcfg_tree::{AiSettings, ConfigTree, SandboxProfile};

    pub const SMALL_DEFAULT_MODEL: &str = "zai/glm-4.7";

    /// Two-model registry: one free Z.AI model and one premium OpenAI model
    pub fn small_registry() -> ModelRegistry {
        small_registry_builder().build().unwrap()
    }

    /// Builder for [`small_registry`], for tests that add broken entries
    pub fn small_registry_builder() -> RegistryBuilder {
        RegistryBuilder::new()
            .available("zai/glm-4.7")
            .available("openai/gpt-4o")
            .display_name("zai/glm-4.7", "GLM 4.7 (Z.AI)")
            .display_name("openai/gpt-4o", "GPT-4o")
            .dispatch("zai/glm-4.7", Provider::Zai, "glm-4.7")
            .dispatch("openai/gpt-4o", Provider::OpenAi, "gpt-4o")
            .tier("zai/glm-4.7", ModelTier::Free)
    }

    /// Built-in tree whose AI section only knows [`small_registry`]
    pub fn small_tree() -> ConfigTree {
        let ai = AiSettings::new(small_registry(), SMALL_DEFAULT_MODEL).unwrap();
        ConfigTree::builder().ai(ai).build().unwrap()
    }

    /// Built-in tree with custom sandbox timeouts, in minutes
    pub fn tree_with_timeouts(vercel_minutes: u32, e2b_minutes: u32) -> ConfigTree {
        ConfigTree::builder()
            .sandbox(SandboxProfile::vercel().with_timeout_minutes(minutes(vercel_minutes)))
            .sandbox(SandboxProfile::e2b().with_timeout_minutes(minutes(e2b_minutes)))
            .build()
            .unwrap()
    }

    pub fn minutes(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).expect("timeout must be at least one minute")
    }
}

pub mod assertions {
    use appcfg_tree::{ConfigTree, ConfigValue};

    /// Assert the value at `path` is the given integer
    pub fn assert_integer_at(tree: &ConfigTree, path: &str, expected: u64) {
        assert_eq!(
            tree.value(path),
            Some(ConfigValue::Integer(expected)),
            "unexpected value at {path}"
        );
    }

    /// Assert nothing is stored at `path`
    pub fn assert_absent(tree: &ConfigTree, path: &str) {
        let value = tree.value(path);
        assert!(value.is_none(), "expected nothing at {path}, found {value:?}");
    }
}
