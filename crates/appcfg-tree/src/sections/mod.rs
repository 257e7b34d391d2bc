//! Typed configuration sections

mod ai;
mod sandbox;
mod settings;

pub use ai::AiSettings;
pub use sandbox::{SandboxProfile, SandboxProvider, SandboxRuntime, UnknownRuntimeError};
pub use settings::{
    ApiSettings, CodeApplicationSettings, DevSettings, FileSettings, PackageSettings, UiSettings,
};
