//! appcfg Model Registry
//!
//! Resolves the model identifier a user picks in the assistant into the
//! provider and API model name a provider client needs.
//!
//! # Core Concepts
//!
//! - [`ModelRegistry`]: validated, ordered identifier → [`ModelDescriptor`] map
//! - [`RegistryBuilder`]: joins the available/display-name/dispatch tables and
//!   refuses to build if any available model is not fully described
//! - [`DispatchDescriptor`]: `{provider, api_model_name}` routing pair
//! - [`UnknownModelError`]: loud failure for unregistered identifiers
//!
//! # Example
//!
//! ```rust
//! use appcfg_models::{catalog, Provider};
//!
//! let registry = catalog::builtin_registry().unwrap();
//! let model = registry.resolve("zai/glm-4.7").unwrap();
//! assert_eq!(model.provider(), Provider::Zai);
//! assert_eq!(model.api_model_name(), "glm-4.7");
//!
//! assert!(registry.resolve("unknown/model").is_err());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
mod descriptor;
mod error;
mod provider;
mod registry;

// Re-exports
pub use descriptor::{DispatchDescriptor, ModelDescriptor};
pub use error::{EntryTable, RegistryError, UnknownModelError};
pub use provider::{ModelTier, Provider, UnknownProviderError};
pub use registry::{ModelRegistry, RegistryBuilder};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
