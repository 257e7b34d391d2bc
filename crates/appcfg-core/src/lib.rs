//! appcfg Core
//!
//! The process-wide, read-only configuration store and model selection for
//! request dispatch.
//!
//! # Example
//!
//! ```rust
//! use appcfg_core::AppConfig;
//! use appcfg_models::Provider;
//!
//! let config = AppConfig::global().unwrap();
//!
//! let model = config.select_model(Some("zai/glm-4.7")).unwrap();
//! assert_eq!(model.provider(), Provider::Zai);
//!
//! let timeout = config.value("vercelSandbox.timeoutMs").and_then(|v| v.as_u64());
//! assert_eq!(timeout, Some(900_000));
//!
//! assert!(config.select_model(Some("nope/model")).is_err());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod store;

// Re-exports
pub use error::AppConfigError;
pub use store::AppConfig;

/// Prelude for common imports
pub mod prelude {
    //! Common imports for reading application configuration
    pub use crate::{AppConfig, AppConfigError};
    pub use appcfg_models::{DispatchDescriptor, ModelDescriptor, Provider, UnknownModelError};
    pub use appcfg_tree::{ConfigValue, SandboxProvider, Section};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
