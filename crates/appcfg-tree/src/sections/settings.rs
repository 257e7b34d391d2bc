//! Operational settings sections
//!
//! Plain timing constants, limits and flags consumed by the UI, the code
//! applier, the package installer, the file scanner and the API client.
//! Millisecond fields keep their raw `u64` for path lookups and also have a
//! [`Duration`] getter.

use std::time::Duration;

use crate::value::{ConfigNode, ConfigValue};

/// How generated code is applied to the sandbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeApplicationSettings {
    /// Delay before refreshing the preview iframe (ms)
    pub default_refresh_delay_ms: u64,
    /// Delay before refreshing after packages were installed (ms)
    pub package_install_refresh_delay_ms: u64,
    /// Retry generation when a response looks truncated
    pub enable_truncation_recovery: bool,
    /// Recovery attempts per file
    pub max_truncation_recovery_attempts: u32,
}

impl Default for CodeApplicationSettings {
    fn default() -> Self {
        Self {
            default_refresh_delay_ms: 2000,
            package_install_refresh_delay_ms: 5000,
            // Too many false positives.
            enable_truncation_recovery: false,
            max_truncation_recovery_attempts: 1,
        }
    }
}

impl CodeApplicationSettings {
    /// Preview refresh delay
    #[inline]
    #[must_use]
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.default_refresh_delay_ms)
    }

    /// Preview refresh delay after a package install
    #[inline]
    #[must_use]
    pub fn package_install_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.package_install_refresh_delay_ms)
    }
}

impl ConfigNode for CodeApplicationSettings {
    fn keys(&self) -> Vec<&str> {
        vec![
            "defaultRefreshDelay",
            "packageInstallRefreshDelay",
            "enableTruncationRecovery",
            "maxTruncationRecoveryAttempts",
        ]
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "defaultRefreshDelay" => Some(self.default_refresh_delay_ms.into()),
            "packageInstallRefreshDelay" => Some(self.package_install_refresh_delay_ms.into()),
            "enableTruncationRecovery" => Some(self.enable_truncation_recovery.into()),
            "maxTruncationRecoveryAttempts" => Some(self.max_truncation_recovery_attempts.into()),
            _ => None,
        }
    }
}

/// UI toggles and timings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    /// Show the model selector
    pub show_model_selector: bool,
    /// Show the sandbox status indicator
    pub show_status_indicator: bool,
    /// Animation duration (ms)
    pub animation_duration_ms: u64,
    /// Toast notification duration (ms)
    pub toast_duration_ms: u64,
    /// Chat messages kept in memory
    pub max_chat_messages: u32,
    /// Recent messages sent as context
    pub max_recent_messages_context: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_model_selector: true,
            show_status_indicator: true,
            animation_duration_ms: 200,
            toast_duration_ms: 3000,
            max_chat_messages: 100,
            max_recent_messages_context: 20,
        }
    }
}

impl UiSettings {
    /// Animation duration
    #[inline]
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Toast duration
    #[inline]
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl ConfigNode for UiSettings {
    fn keys(&self) -> Vec<&str> {
        vec![
            "showModelSelector",
            "showStatusIndicator",
            "animationDuration",
            "toastDuration",
            "maxChatMessages",
            "maxRecentMessagesContext",
        ]
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "showModelSelector" => Some(self.show_model_selector.into()),
            "showStatusIndicator" => Some(self.show_status_indicator.into()),
            "animationDuration" => Some(self.animation_duration_ms.into()),
            "toastDuration" => Some(self.toast_duration_ms.into()),
            "maxChatMessages" => Some(self.max_chat_messages.into()),
            "maxRecentMessagesContext" => Some(self.max_recent_messages_context.into()),
            _ => None,
        }
    }
}

/// Development diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevSettings {
    /// Verbose client-side logging
    pub enable_debug_logging: bool,
    /// Performance monitoring
    pub enable_performance_monitoring: bool,
    /// Log provider API responses
    pub log_api_responses: bool,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self {
            enable_debug_logging: true,
            enable_performance_monitoring: false,
            log_api_responses: true,
        }
    }
}

impl ConfigNode for DevSettings {
    fn keys(&self) -> Vec<&str> {
        vec![
            "enableDebugLogging",
            "enablePerformanceMonitoring",
            "logApiResponses",
        ]
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "enableDebugLogging" => Some(self.enable_debug_logging.into()),
            "enablePerformanceMonitoring" => Some(self.enable_performance_monitoring.into()),
            "logApiResponses" => Some(self.log_api_responses.into()),
            _ => None,
        }
    }
}

/// Package installation inside the sandbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSettings {
    /// Pass `--legacy-peer-deps` to npm install
    pub use_legacy_peer_deps: bool,
    /// Install timeout (ms)
    pub install_timeout_ms: u64,
    /// Restart Vite after installing
    pub auto_restart_vite: bool,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            use_legacy_peer_deps: true,
            install_timeout_ms: 60_000,
            auto_restart_vite: true,
        }
    }
}

impl PackageSettings {
    /// Install timeout
    #[inline]
    #[must_use]
    pub fn install_timeout(&self) -> Duration {
        Duration::from_millis(self.install_timeout_ms)
    }
}

impl ConfigNode for PackageSettings {
    fn keys(&self) -> Vec<&str> {
        vec!["useLegacyPeerDeps", "installTimeout", "autoRestartVite"]
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "useLegacyPeerDeps" => Some(self.use_legacy_peer_deps.into()),
            "installTimeout" => Some(self.install_timeout_ms.into()),
            "autoRestartVite" => Some(self.auto_restart_vite.into()),
            _ => None,
        }
    }
}

/// Inputs for the sandbox file scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettings {
    /// Glob patterns to skip
    pub exclude_patterns: Vec<String>,
    /// Largest file read, in bytes
    pub max_file_size: u64,
    /// Extensions treated as text
    pub text_file_extensions: Vec<String>,
}

impl Default for FileSettings {
    fn default() -> Self {
        let exclude_patterns = [
            "node_modules/**",
            ".git/**",
            ".next/**",
            "dist/**",
            "build/**",
            "*.log",
            ".DS_Store",
        ];
        let text_file_extensions = [
            ".js", ".jsx", ".ts", ".tsx", ".css", ".scss", ".sass", ".html", ".xml", ".svg",
            ".json", ".yml", ".yaml", ".md", ".txt", ".env", ".gitignore", ".dockerignore",
        ];
        Self {
            exclude_patterns: exclude_patterns.map(String::from).to_vec(),
            max_file_size: 1024 * 1024,
            text_file_extensions: text_file_extensions.map(String::from).to_vec(),
        }
    }
}

impl FileSettings {
    /// Check if a file name ends in one of the text extensions
    ///
    /// Dotfiles such as `.gitignore` match on their whole name.
    #[must_use]
    pub fn is_text_file(&self, file_name: &str) -> bool {
        self.text_file_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

impl ConfigNode for FileSettings {
    fn keys(&self) -> Vec<&str> {
        vec!["excludePatterns", "maxFileSize", "textFileExtensions"]
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "excludePatterns" => Some(ConfigValue::text_list(&self.exclude_patterns)),
            "maxFileSize" => Some(self.max_file_size.into()),
            "textFileExtensions" => Some(ConfigValue::text_list(&self.text_file_extensions)),
            _ => None,
        }
    }
}

/// Retry and timeout policy for external API calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiSettings {
    /// Attempts after the first failure
    pub max_retries: u32,
    /// Delay between attempts (ms)
    pub retry_delay_ms: u64,
    /// Per-request timeout (ms)
    pub request_timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 1000,
            request_timeout_ms: 30_000,
        }
    }
}

impl ApiSettings {
    /// Delay between attempts
    #[inline]
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Per-request timeout
    #[inline]
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl ConfigNode for ApiSettings {
    fn keys(&self) -> Vec<&str> {
        vec!["maxRetries", "retryDelay", "requestTimeout"]
    }

    fn child(&self, key: &str) -> Option<ConfigValue<'_>> {
        match key {
            "maxRetries" => Some(self.max_retries.into()),
            "retryDelay" => Some(self.retry_delay_ms.into()),
            "requestTimeout" => Some(self.request_timeout_ms.into()),
            _ => None,
        }
    }
}
