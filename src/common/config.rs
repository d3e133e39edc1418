// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use serde::de::DeserializeOwned;
#[allow(deprecated)]
use std::env::home_dir;
use std::env::var;
use std::fs::read_to_string;

const DEFAULT_FILE_NAME: &str = "vk-relay.toml";

/// Configuration parameters shared by the handlers.
#[derive(Debug)]
pub struct RelayConfig {
    debug_enabled: bool,
    toml: String,
}

impl RelayConfig {
    /// Creates a configuration builder.
    pub fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder {
            debug_enabled: false,
            toml: None,
        }
    }

    /// Load configuration the way the deployed handlers do.
    ///
    /// `VK_RELAY_CONFIG` names the TOML file (default `vk-relay.toml`) and
    /// `VK_RELAY_DEBUG` turns on debug tracing. A missing file means defaults.
    pub fn load() -> Result<Self, Error> {
        let file_name = var("VK_RELAY_CONFIG").unwrap_or_else(|_| DEFAULT_FILE_NAME.to_string());
        let debug = var("VK_RELAY_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let config = Self::builder().debug(debug).toml_file(&file_name).build();
        // Surface syntax errors now rather than on the first request.
        config.get::<toml::Table>()?;
        Ok(config)
    }

    /// Returns `true` if debug is enabled.
    pub fn debug(&self) -> bool {
        self.debug_enabled
    }

    /// Returns configuration parameters.
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Error> {
        toml::from_str(&self.toml).map_err(|e: toml::de::Error| Error::Config(format!("toml: {e}")))
    }
}

/// Builds a [`RelayConfig`]. Without any TOML source every setting keeps its default.
pub struct RelayConfigBuilder {
    debug_enabled: bool,
    toml: Option<String>,
}

impl RelayConfigBuilder {
    /// Finish building.
    pub fn build(self) -> RelayConfig {
        RelayConfig {
            debug_enabled: self.debug_enabled,
            toml: self.toml.unwrap_or_default(),
        }
    }

    /// Enable or disable debug tracing.
    pub fn debug(self, debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            toml: self.toml,
        }
    }

    /// Read `file_name` from the home directory, or else from the working directory.
    pub fn toml_file(self, file_name: &str) -> Self {
        #[allow(deprecated)]
        let home_path = home_dir().and_then(|pathbuf| {
            pathbuf
                .to_str()
                .map(|path| format!("{path}/{file_name}"))
        });
        let local_path = format!("./{file_name}");
        let toml = home_path
            .and_then(|path| read_to_string(path).ok())
            .or_else(|| read_to_string(&local_path).ok());
        if toml.is_none() {
            tracing::debug!("{file_name}: not found, using defaults");
        }
        Self {
            debug_enabled: self.debug_enabled,
            toml: toml.or(self.toml),
        }
    }

    /// Use `toml` as the configuration text.
    pub fn toml_str(self, toml: &str) -> Self {
        Self {
            debug_enabled: self.debug_enabled,
            toml: Some(toml.to_string()),
        }
    }
}
