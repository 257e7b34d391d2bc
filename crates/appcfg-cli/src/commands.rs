//! Subcommand implementations
//!
//! Commands render to a `String`; `main` decides where it goes and which
//! exit code to use.

use anyhow::{ensure, Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use appcfg_core::AppConfig;
use appcfg_models::ModelDescriptor;
use appcfg_tree::{ConfigTree, SectionName};

/// Output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Output for stdout
    Rendered(String),
    /// Nothing found; notice for stderr
    Absent(String),
}

pub(crate) fn render<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<String> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value).context("failed to render JSON")?,
        Format::Yaml => serde_yaml::to_string(value).context("failed to render YAML")?,
    };
    Ok(text.trim_end().to_string())
}

pub(crate) fn sections() -> String {
    ConfigTree::section_names().collect::<Vec<_>>().join("\n")
}

pub(crate) fn section(config: &AppConfig, name: &str, format: Format) -> Result<Outcome> {
    Ok(match config.section(name) {
        Some(section) => Outcome::Rendered(render(&section, format)?),
        None => Outcome::Absent(format!("unknown section '{name}'")),
    })
}

pub(crate) fn get(config: &AppConfig, path: &str, format: Format) -> Result<Outcome> {
    Ok(match config.value(path) {
        Some(value) => Outcome::Rendered(render(&value, format)?),
        None => Outcome::Absent(format!("no value at '{path}'")),
    })
}

pub(crate) fn model(config: &AppConfig, model_id: &str, format: Format) -> Result<String> {
    let model = config.select_model(Some(model_id))?;
    render(model, format)
}

pub(crate) fn models(config: &AppConfig, format: Format) -> Result<String> {
    let models: Vec<&ModelDescriptor> = config.registry().iter().collect();
    render(&models, format)
}

pub(crate) fn dump(config: &AppConfig, format: Format) -> Result<String> {
    render(config.tree(), format)
}

/// Re-validate a loaded configuration end to end
///
/// Every model must select with a non-empty dispatch target, the default
/// model must select, and every declared section key must resolve by path.
pub(crate) fn check(config: &AppConfig) -> Result<String> {
    let registry = config.registry();
    ensure!(!registry.is_empty(), "no models are registered");

    for model_id in registry.ids() {
        let model = config.select_model(Some(model_id))?;
        ensure!(
            !model.api_model_name().is_empty(),
            "model '{model_id}' has an empty dispatch target"
        );
    }
    let default = config
        .select_model(None)
        .context("default model does not resolve")?;

    let mut keys = 0usize;
    for name in SectionName::ALL {
        let section = config.tree().section(name);
        for key in section.keys() {
            if key.contains('.') {
                continue;
            }
            let path = format!("{name}.{key}");
            ensure!(config.value(&path).is_some(), "declared key '{path}' does not resolve");
            keys += 1;
        }
    }
    debug!(keys, "all declared keys resolve");

    Ok(format!(
        "configuration ok: {} sections, {} models, default model {}",
        SectionName::ALL.len(),
        registry.len(),
        default.id()
    ))
}
