//! Runtime configuration of the frontend.
//!
//! Provided once at the app root via context; components that need a value
//! read it with [`use_app_config`] and pass it down explicitly.

use leptos::prelude::*;

/// Interval between two external-auth refreshes while polling
pub const DEFAULT_EXTERNAL_AUTH_POLL_INTERVAL_MS: u32 = 1_000;
/// Polling stops and is marked abandoned after this long
pub const DEFAULT_EXTERNAL_AUTH_POLL_TIMEOUT_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub external_auth_poll_interval_ms: u32,
    pub external_auth_poll_timeout_ms: u32,
}

impl AppConfig {
    /// Number of refreshes before polling is abandoned.
    pub fn max_poll_attempts(&self) -> u32 {
        if self.external_auth_poll_interval_ms == 0 {
            return 0;
        }
        self.external_auth_poll_timeout_ms / self.external_auth_poll_interval_ms
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            external_auth_poll_interval_ms: DEFAULT_EXTERNAL_AUTH_POLL_INTERVAL_MS,
            external_auth_poll_timeout_ms: DEFAULT_EXTERNAL_AUTH_POLL_TIMEOUT_MS,
        }
    }
}

/// Config from context, or defaults when rendered outside the app root.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_poll_attempts() {
        assert_eq!(AppConfig::default().max_poll_attempts(), 60);
        let config = AppConfig {
            external_auth_poll_interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.max_poll_attempts(), 0);
    }
}
