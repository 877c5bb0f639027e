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

use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for the Tradewire bus.
///
/// All configurable values, loaded from TOML files in XDG-compliant
/// directories. Every field has a default, so a missing or partial file is
/// fine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TradewireConfig {
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Tracing and logging configuration
    pub tracing: TracingConfig,
    /// Behavioral configuration switches
    pub behavior: BehaviorConfig,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Default wait for a correlated reply in milliseconds
    pub reply_wait_timeout_ms: u64,
}

/// Tracing and logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Default tracing level, used as the base filter directive when a
    /// subscriber is installed
    pub default_level: String,
}

/// Behavioral configuration switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Enable tracing
    pub enable_tracing: bool,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            reply_wait_timeout_ms: 5_000,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            enable_tracing: true,
        }
    }
}

impl TradewireConfig {
    /// Convert the reply wait timeout to a Duration
    pub const fn reply_wait_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.reply_wait_timeout_ms)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Attempts to load `config.toml` from the `tradewire` XDG prefix
    /// (`$XDG_CONFIG_HOME/tradewire/config.toml` and friends). If no
    /// configuration file is found, returns the default configuration. If a
    /// configuration file exists but is malformed, logs an error and uses
    /// defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("tradewire") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                    Ok(config) => {
                        info!("Successfully loaded configuration");
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
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: TradewireConfig = TradewireConfig::load();
}
