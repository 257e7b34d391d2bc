//! The configuration tree
//!
//! [`ConfigTree`] owns one typed struct per section and only hands out
//! shared borrows. It is assembled by [`ConfigTreeBuilder`]; once built it
//! has no mutating methods.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::TreeError;
use crate::path::ConfigPath;
use crate::resolver::PathResolver;
use crate::sections::{
    AiSettings, ApiSettings, CodeApplicationSettings, DevSettings, FileSettings, PackageSettings,
    SandboxProfile, SandboxProvider, UiSettings,
};
use crate::value::{ConfigNode, ConfigValue, Section};

/// Top-level section names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    /// `vercelSandbox`
    VercelSandbox,
    /// `e2b`
    E2b,
    /// `ai`
    Ai,
    /// `codeApplication`
    CodeApplication,
    /// `ui`
    Ui,
    /// `dev`
    Dev,
    /// `packages`
    Packages,
    /// `files`
    Files,
    /// `api`
    Api,
}

impl SectionName {
    /// All sections in declaration order
    pub const ALL: [Self; 9] = [
        Self::VercelSandbox,
        Self::E2b,
        Self::Ai,
        Self::CodeApplication,
        Self::Ui,
        Self::Dev,
        Self::Packages,
        Self::Files,
        Self::Api,
    ];

    /// Key the section is addressed by
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VercelSandbox => "vercelSandbox",
            Self::E2b => "e2b",
            Self::Ai => "ai",
            Self::CodeApplication => "codeApplication",
            Self::Ui => "ui",
            Self::Dev => "dev",
            Self::Packages => "packages",
            Self::Files => "files",
            Self::Api => "api",
        }
    }
}

impl Display for SectionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionName {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownSectionError(s.to_string()))
    }
}

/// Section name did not match any declared section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSectionError(pub String);

/// All declared settings, organized by section
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTree {
    vercel_sandbox: SandboxProfile,
    e2b: SandboxProfile,
    ai: AiSettings,
    code_application: CodeApplicationSettings,
    ui: UiSettings,
    dev: DevSettings,
    packages: PackageSettings,
    files: FileSettings,
    api: ApiSettings,
}

impl ConfigTree {
    /// Tree with every built-in default
    ///
    /// # Errors
    /// Returns error if the built-in model catalog fails validation
    pub fn builtin() -> Result<Self, TreeError> {
        ConfigTreeBuilder::new().build()
    }

    /// Start from the built-in defaults and override sections
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigTreeBuilder {
        ConfigTreeBuilder::new()
    }

    /// Section by name, `None` if no such section
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Section<'_>> {
        name.parse().ok().map(|name| self.section(name))
    }

    /// Section by typed name
    #[must_use]
    pub fn section(&self, name: SectionName) -> Section<'_> {
        match name {
            SectionName::VercelSandbox => Section::Sandbox(&self.vercel_sandbox),
            SectionName::E2b => Section::Sandbox(&self.e2b),
            SectionName::Ai => Section::Ai(&self.ai),
            SectionName::CodeApplication => Section::CodeApplication(&self.code_application),
            SectionName::Ui => Section::Ui(&self.ui),
            SectionName::Dev => Section::Dev(&self.dev),
            SectionName::Packages => Section::Packages(&self.packages),
            SectionName::Files => Section::Files(&self.files),
            SectionName::Api => Section::Api(&self.api),
        }
    }

    /// Value at a dot-path, `None` if nothing is there
    #[inline]
    #[must_use]
    pub fn value(&self, path: &str) -> Option<ConfigValue<'_>> {
        PathResolver::new(self).resolve(path)
    }

    /// Value at a parsed path
    #[inline]
    #[must_use]
    pub fn value_at(&self, path: &ConfigPath) -> Option<ConfigValue<'_>> {
        PathResolver::new(self).resolve_path(path)
    }

    /// Names of all sections
    pub fn section_names() -> impl Iterator<Item = &'static str> {
        SectionName::ALL.into_iter().map(SectionName::as_str)
    }

    /// Vercel Sandbox profile
    #[inline]
    #[must_use]
    pub fn vercel_sandbox(&self) -> &SandboxProfile {
        &self.vercel_sandbox
    }

    /// E2B profile
    #[inline]
    #[must_use]
    pub fn e2b(&self) -> &SandboxProfile {
        &self.e2b
    }

    /// Profile for `provider`
    #[inline]
    #[must_use]
    pub fn sandbox(&self, provider: SandboxProvider) -> &SandboxProfile {
        match provider {
            SandboxProvider::Vercel => &self.vercel_sandbox,
            SandboxProvider::E2b => &self.e2b,
        }
    }

    /// AI settings
    #[inline]
    #[must_use]
    pub fn ai(&self) -> &AiSettings {
        &self.ai
    }

    /// Code application settings
    #[inline]
    #[must_use]
    pub fn code_application(&self) -> &CodeApplicationSettings {
        &self.code_application
    }

    /// UI settings
    #[inline]
    #[must_use]
    pub fn ui(&self) -> &UiSettings {
        &self.ui
    }

    /// Development settings
    #[inline]
    #[must_use]
    pub fn dev(&self) -> &DevSettings {
        &self.dev
    }

    /// Package installation settings
    #[inline]
    #[must_use]
    pub fn packages(&self) -> &PackageSettings {
        &self.packages
    }

    /// File scanner settings
    #[inline]
    #[must_use]
    pub fn files(&self) -> &FileSettings {
        &self.files
    }

    /// API client settings
    #[inline]
    #[must_use]
    pub fn api(&self) -> &ApiSettings {
        &self.api
    }
}

impl ConfigNode for ConfigTree {
    fn keys(&self) -> Vec<&str> {
        Self::section_names().collect()
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        self.get(key).map(ConfigValue::Section)
    }
}

impl Serialize for ConfigTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SectionName::ALL.len()))?;
        for name in SectionName::ALL {
            map.serialize_entry(name.as_str(), &self.section(name))?;
        }
        map.end()
    }
}

/// Builder for [`ConfigTree`]
///
/// Every section starts at its built-in default. The AI section is built
/// from the model catalog in [`build`](Self::build) unless one was supplied.
#[derive(Debug, Clone)]
pub struct ConfigTreeBuilder {
    vercel_sandbox: SandboxProfile,
    e2b: SandboxProfile,
    ai: Option<AiSettings>,
    code_application: CodeApplicationSettings,
    ui: UiSettings,
    dev: DevSettings,
    packages: PackageSettings,
    files: FileSettings,
    api: ApiSettings,
}

impl Default for ConfigTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTreeBuilder {
    /// Builder seeded with built-in defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            vercel_sandbox: SandboxProfile::vercel(),
            e2b: SandboxProfile::e2b(),
            ai: None,
            code_application: CodeApplicationSettings::default(),
            ui: UiSettings::default(),
            dev: DevSettings::default(),
            packages: PackageSettings::default(),
            files: FileSettings::default(),
            api: ApiSettings::default(),
        }
    }

    /// Replace the profile for the profile's own provider
    #[must_use]
    pub fn sandbox(mut self, profile: SandboxProfile) -> Self {
        match profile.provider() {
            SandboxProvider::Vercel => self.vercel_sandbox = profile,
            SandboxProvider::E2b => self.e2b = profile,
        }
        self
    }

    /// Replace the AI section
    #[must_use]
    pub fn ai(mut self, ai: AiSettings) -> Self {
        self.ai = Some(ai);
        self
    }

    /// Replace the code application section
    #[must_use]
    pub fn code_application(mut self, settings: CodeApplicationSettings) -> Self {
        self.code_application = settings;
        self
    }

    /// Replace the UI section
    #[must_use]
    pub fn ui(mut self, settings: UiSettings) -> Self {
        self.ui = settings;
        self
    }

    /// Replace the dev section
    #[must_use]
    pub fn dev(mut self, settings: DevSettings) -> Self {
        self.dev = settings;
        self
    }

    /// Replace the packages section
    #[must_use]
    pub fn packages(mut self, settings: PackageSettings) -> Self {
        self.packages = settings;
        self
    }

    /// Replace the files section
    #[must_use]
    pub fn files(mut self, settings: FileSettings) -> Self {
        self.files = settings;
        self
    }

    /// Replace the API section
    #[must_use]
    pub fn api(mut self, settings: ApiSettings) -> Self {
        self.api = settings;
        self
    }

    /// Build the tree
    ///
    /// # Errors
    /// Returns error if no AI section was supplied and the built-in catalog
    /// fails validation
    pub fn build(self) -> Result<ConfigTree, TreeError> {
        let ai = match self.ai {
            Some(ai) => ai,
            None => AiSettings::builtin()?,
        };
        Ok(ConfigTree {
            vercel_sandbox: self.vercel_sandbox,
            e2b: self.e2b,
            ai,
            code_application: self.code_application,
            ui: self.ui,
            dev: self.dev,
            packages: self.packages,
            files: self.files,
            api: self.api,
        })
    }
}
