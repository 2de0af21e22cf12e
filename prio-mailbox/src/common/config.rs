/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::Path;
use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Configuration for mailbox queues and dispatchers.
///
/// Loaded from TOML in the XDG config directory. Every section and field is
/// optional; anything missing takes its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MailboxConfig {
    /// Capacity-related settings
    pub limits: LimitsConfig,
    /// Default values
    pub defaults: DefaultsConfig,
    /// Timeout settings
    pub timeouts: TimeoutConfig,
}

/// Capacity hints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Initial heap capacity for queues built through `Default` constructors.
    ///
    /// A hint only: queues are unbounded and grow past it.
    pub initial_capacity: usize,
}

/// Default values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Priority given to every message when no calculator is installed
    pub priority: i32,
    /// Name used for mailboxes created without one
    pub mailbox_name: String,
}

/// Timeout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// How long `DispatcherHandle::stop` waits for the drain loop to finish, in milliseconds
    pub dispatcher_shutdown_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            priority: 1,
            mailbox_name: "mailbox".to_string(),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            dispatcher_shutdown_timeout_ms: 10_000,
        }
    }
}

impl MailboxConfig {
    /// Dispatcher shutdown timeout as a `Duration`
    pub const fn dispatcher_shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.dispatcher_shutdown_timeout_ms)
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the parser error if `text` is not valid TOML for this structure.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// cannot be read or parsed. Failures are logged.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(config_str) => match Self::from_toml_str(&config_str) {
                Ok(config) => {
                    info!("Loaded mailbox configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    error!("Failed to parse configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Loads configuration from XDG-compliant locations.
    ///
    /// Looks for `prio-mailbox/config.toml` under `$XDG_CONFIG_HOME` (usually
    /// `~/.config`) and the XDG system config directories. Returns defaults if
    /// no file exists or the file is malformed.
    pub fn load() -> Self {
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("prio-mailbox") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            Self::load_from(&path)
        } else {
            info!("No mailbox configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration, loaded once on first use.
    pub static ref CONFIG: MailboxConfig = MailboxConfig::load();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = MailboxConfig::from_toml_str("").unwrap();
        assert_eq!(config.limits.initial_capacity, 16);
        assert_eq!(config.defaults.priority, 1);
        assert_eq!(config.defaults.mailbox_name, "mailbox");
        assert_eq!(config.dispatcher_shutdown_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = MailboxConfig::from_toml_str(
            r#"
            [limits]
            initial_capacity = 1024

            [defaults]
            priority = -5
            "#,
        )
        .unwrap();
        assert_eq!(config.limits.initial_capacity, 1024);
        assert_eq!(config.defaults.priority, -5);
        assert_eq!(config.defaults.mailbox_name, "mailbox");
        assert_eq!(config.timeouts.dispatcher_shutdown_timeout_ms, 10_000);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(MailboxConfig::from_toml_str("[limits]\ninitial_capacity = \"big\"").is_err());
    }
}
