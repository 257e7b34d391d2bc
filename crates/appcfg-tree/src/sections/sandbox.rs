//! Sandbox provisioning profiles
//!
//! One [`SandboxProfile`] per [`SandboxProvider`]. The tree stores them in
//! dedicated fields, so there is always exactly one profile per provider.

use std::fmt::{self, Display, Formatter};
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::derived::TIMEOUT_MS;
use crate::value::{ConfigNode, ConfigValue};

/// Literal minute counts, checked when the constant is evaluated
const fn minutes(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(minutes) => minutes,
        None => panic!("sandbox timeout must be at least one minute"),
    }
}

const VERCEL_TIMEOUT: NonZeroU32 = minutes(15);
const E2B_TIMEOUT: NonZeroU32 = minutes(30);

/// Ephemeral execution environment provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SandboxProvider {
    /// Vercel Sandbox (Next.js/React dev server)
    Vercel,
    /// E2B (Vite dev server)
    E2b,
}

impl SandboxProvider {
    /// All providers
    pub const ALL: [Self; 2] = [Self::Vercel, Self::E2b];

    /// Provider key
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vercel => "vercel",
            Self::E2b => "e2b",
        }
    }

    /// Top-level section the profile lives under
    #[inline]
    #[must_use]
    pub const fn section_name(self) -> &'static str {
        match self {
            Self::Vercel => "vercelSandbox",
            Self::E2b => "e2b",
        }
    }

    const fn port_key(self) -> &'static str {
        match self {
            Self::Vercel => "devPort",
            Self::E2b => "vitePort",
        }
    }

    const fn startup_delay_key(self) -> &'static str {
        match self {
            Self::Vercel => "devServerStartupDelay",
            Self::E2b => "viteStartupDelay",
        }
    }
}

impl Display for SandboxProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime image a sandbox boots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SandboxRuntime {
    /// Node.js 22
    #[serde(rename = "node22")]
    Node22,
    /// Python 3.13
    #[serde(rename = "python3.13")]
    Python313,
    /// v0 Next.js + shadcn template
    #[serde(rename = "v0-next-shadcn")]
    V0NextShadcn,
    /// Ubuntu XFCE desktop for computer-use agents
    #[serde(rename = "cua-ubuntu-xfce")]
    CuaUbuntuXfce,
}

impl SandboxRuntime {
    /// All runtimes
    pub const ALL: [Self; 4] = [
        Self::Node22,
        Self::Python313,
        Self::V0NextShadcn,
        Self::CuaUbuntuXfce,
    ];

    /// Runtime identifier passed to the provider
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node22 => "node22",
            Self::Python313 => "python3.13",
            Self::V0NextShadcn => "v0-next-shadcn",
            Self::CuaUbuntuXfce => "cua-ubuntu-xfce",
        }
    }
}

impl Display for SandboxRuntime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SandboxRuntime {
    type Err = UnknownRuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|runtime| runtime.as_str() == s)
            .ok_or_else(|| UnknownRuntimeError(s.to_string()))
    }
}

/// Runtime identifier did not match any known runtime
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sandbox runtime: {0}")]
pub struct UnknownRuntimeError(pub String);

/// Provisioning parameters for one sandbox provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxProfile {
    provider: SandboxProvider,
    timeout_minutes: NonZeroU32,
    dev_port: u16,
    startup_delay_ms: u64,
    css_rebuild_delay_ms: Option<u64>,
    working_directory: String,
    runtime: Option<SandboxRuntime>,
}

impl SandboxProfile {
    /// Vercel Sandbox defaults
    #[must_use]
    pub fn vercel() -> Self {
        Self {
            provider: SandboxProvider::Vercel,
            timeout_minutes: VERCEL_TIMEOUT,
            dev_port: 3000,
            startup_delay_ms: 7000,
            css_rebuild_delay_ms: Some(2000),
            working_directory: "/app".to_string(),
            runtime: Some(SandboxRuntime::Node22),
        }
    }

    /// E2B defaults
    #[must_use]
    pub fn e2b() -> Self {
        Self {
            provider: SandboxProvider::E2b,
            timeout_minutes: E2B_TIMEOUT,
            dev_port: 5173,
            startup_delay_ms: 10_000,
            css_rebuild_delay_ms: None,
            working_directory: "/home/user/app".to_string(),
            runtime: None,
        }
    }

    /// Defaults for `provider`
    #[must_use]
    pub fn defaults_for(provider: SandboxProvider) -> Self {
        match provider {
            SandboxProvider::Vercel => Self::vercel(),
            SandboxProvider::E2b => Self::e2b(),
        }
    }

    /// With timeout in minutes
    #[inline]
    #[must_use]
    pub fn with_timeout_minutes(mut self, minutes: NonZeroU32) -> Self {
        self.timeout_minutes = minutes;
        self
    }

    /// With dev server port
    #[inline]
    #[must_use]
    pub fn with_dev_port(mut self, port: u16) -> Self {
        self.dev_port = port;
        self
    }

    /// With dev server startup delay
    #[inline]
    #[must_use]
    pub fn with_startup_delay_ms(mut self, delay_ms: u64) -> Self {
        self.startup_delay_ms = delay_ms;
        self
    }

    /// With working directory
    #[inline]
    #[must_use]
    pub fn with_working_directory(mut self, dir: impl Into<String>) -> Self {
        self.working_directory = dir.into();
        self
    }

    /// With runtime image
    #[inline]
    #[must_use]
    pub fn with_runtime(mut self, runtime: SandboxRuntime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Provider this profile configures
    #[inline]
    #[must_use]
    pub fn provider(&self) -> SandboxProvider {
        self.provider
    }

    /// Sandbox lifetime in minutes
    #[inline]
    #[must_use]
    pub fn timeout_minutes(&self) -> NonZeroU32 {
        self.timeout_minutes
    }

    /// Sandbox lifetime in milliseconds, computed from the minutes on each call
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        TIMEOUT_MS.compute(u64::from(self.timeout_minutes.get()))
    }

    /// Sandbox lifetime
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms())
    }

    /// Port the dev server listens on
    #[inline]
    #[must_use]
    pub fn dev_port(&self) -> u16 {
        self.dev_port
    }

    /// Wait for the dev server to come up
    #[inline]
    #[must_use]
    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    /// Wait for a CSS rebuild, if the provider needs one
    #[inline]
    #[must_use]
    pub fn css_rebuild_delay(&self) -> Option<Duration> {
        self.css_rebuild_delay_ms.map(Duration::from_millis)
    }

    /// Directory the app lives in inside the sandbox
    #[inline]
    #[must_use]
    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    /// Runtime image, if the provider takes one
    #[inline]
    #[must_use]
    pub fn runtime(&self) -> Option<SandboxRuntime> {
        self.runtime
    }
}

impl ConfigNode for SandboxProfile {
    fn keys(&self) -> Vec<&str> {
        let mut keys = vec![
            TIMEOUT_MS.base(),
            TIMEOUT_MS.name(),
            self.provider.port_key(),
            self.provider.startup_delay_key(),
        ];
        if self.css_rebuild_delay_ms.is_some() {
            keys.push("cssRebuildDelay");
        }
        keys.push("workingDirectory");
        if self.runtime.is_some() {
            keys.push("runtime");
        }
        keys
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        if key == TIMEOUT_MS.base() {
            return Some(self.timeout_minutes.get().into());
        }
        if key == TIMEOUT_MS.name() {
            return Some(self.timeout_ms().into());
        }
        if key == self.provider.port_key() {
            return Some(self.dev_port.into());
        }
        if key == self.provider.startup_delay_key() {
            return Some(self.startup_delay_ms.into());
        }
        match key {
            "cssRebuildDelay" => self.css_rebuild_delay_ms.map(ConfigValue::from),
            "workingDirectory" => Some(self.working_directory.as_str().into()),
            "runtime" => self.runtime.map(|runtime| runtime.as_str().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn vercel_defaults() {
        let profile = SandboxProfile::vercel();
        assert_eq!(profile.timeout_minutes().get(), 15);
        assert_eq!(profile.timeout_ms(), 900_000);
        assert_eq!(profile.dev_port(), 3000);
        assert_eq!(profile.working_directory(), "/app");
        assert_eq!(profile.runtime(), Some(SandboxRuntime::Node22));
        assert_eq!(profile.css_rebuild_delay(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn e2b_defaults() {
        let profile = SandboxProfile::e2b();
        assert_eq!(profile.timeout_ms(), 1_800_000);
        assert_eq!(profile.dev_port(), 5173);
        assert_eq!(profile.startup_delay(), Duration::from_secs(10));
        assert_eq!(profile.runtime(), None);
        assert_eq!(profile.css_rebuild_delay(), None);
    }

    #[test]
    fn timeout_follows_base_change() {
        let profile = SandboxProfile::vercel().with_timeout_minutes(nz(45));
        assert_eq!(profile.timeout_ms(), 2_700_000);
        assert_eq!(profile.child("timeoutMs"), Some(ConfigValue::Integer(2_700_000)));
        assert_eq!(profile.timeout(), Duration::from_secs(45 * 60));
    }

    #[test]
    fn port_key_depends_on_provider() {
        assert_eq!(SandboxProfile::vercel().child("devPort"), Some(ConfigValue::Integer(3000)));
        assert_eq!(SandboxProfile::vercel().child("vitePort"), None);
        assert_eq!(SandboxProfile::e2b().child("vitePort"), Some(ConfigValue::Integer(5173)));
        assert_eq!(SandboxProfile::e2b().child("devPort"), None);
    }

    #[test]
    fn e2b_has_no_runtime_key() {
        let profile = SandboxProfile::e2b();
        assert!(!profile.keys().contains(&"runtime"));
        assert_eq!(profile.child("runtime"), None);
        assert_eq!(profile.child("cssRebuildDelay"), None);
    }

    #[test]
    fn keys_all_resolve() {
        for provider in SandboxProvider::ALL {
            let profile = SandboxProfile::defaults_for(provider);
            for key in profile.keys() {
                assert!(profile.child(key).is_some(), "{provider}: {key}");
            }
        }
    }

    #[test]
    fn runtime_parse() {
        assert_eq!("python3.13".parse::<SandboxRuntime>().unwrap(), SandboxRuntime::Python313);
        assert!("node18".parse::<SandboxRuntime>().is_err());
    }

    #[test]
    fn builders_override_fields() {
        let profile = SandboxProfile::e2b()
            .with_dev_port(4000)
            .with_startup_delay_ms(1)
            .with_working_directory("/srv")
            .with_runtime(SandboxRuntime::Python313);
        assert_eq!(profile.child("vitePort"), Some(ConfigValue::Integer(4000)));
        assert_eq!(profile.child("viteStartupDelay"), Some(ConfigValue::Integer(1)));
        assert_eq!(profile.child("workingDirectory"), Some(ConfigValue::Text("/srv")));
        assert_eq!(profile.child("runtime"), Some(ConfigValue::Text("python3.13")));
    }
}
