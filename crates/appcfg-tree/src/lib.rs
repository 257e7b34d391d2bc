//! appcfg Configuration Tree
//!
//! Every setting the assistant reads, organized into named sections and
//! addressable by dot-path.
//!
//! # Core Concepts
//!
//! - [`ConfigTree`]: immutable, typed sections (`vercelSandbox`, `e2b`, `ai`, ...)
//! - [`PathResolver`]: `"section.key.subkey"` lookup that returns `None` for
//!   anything missing
//! - [`ConfigValue`] / [`Section`]: what a lookup hands back
//! - [`DerivedField`]: keys computed from a base key on every read
//!   (`timeoutMs` from `timeoutMinutes`)
//!
//! # Example
//!
//! ```rust
//! use appcfg_tree::ConfigTree;
//!
//! let tree = ConfigTree::builtin().unwrap();
//! assert_eq!(tree.value("e2b.timeoutMs").and_then(|v| v.as_u64()), Some(1_800_000));
//! assert_eq!(tree.value("ai.defaultModel").and_then(|v| v.as_str()), Some("google/gemini-3-flash"));
//! assert!(tree.value("does.not.exist").is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod derived;
mod error;
mod path;
mod resolver;
pub mod sections;
mod tree;
mod value;

// Re-exports
pub use derived::{DerivedField, TIMEOUT_MS};
pub use error::TreeError;
pub use path::{ConfigPath, PathError};
pub use resolver::PathResolver;
pub use sections::{
    AiSettings, ApiSettings, CodeApplicationSettings, DevSettings, FileSettings, PackageSettings,
    SandboxProfile, SandboxProvider, SandboxRuntime, UiSettings,
};
pub use tree::{ConfigTree, ConfigTreeBuilder, SectionName, UnknownSectionError};
pub use value::{ConfigNode, ConfigValue, Section};

/// Prelude for common imports
pub mod prelude {
    //! Common imports for reading the configuration tree
    pub use crate::{
        ConfigNode, ConfigPath, ConfigTree, ConfigValue, PathResolver, SandboxProvider, Section,
        TreeError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
