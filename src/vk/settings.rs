// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::{Error, RelayConfig};
use serde::Deserialize;
use std::env::var;

/// The `[vk]` table of the configuration file. Every field has a default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct VkSettings {
    /// Base URL that method names are appended to.
    pub api_host: String,
    /// Value of the `v` parameter.
    pub api_version: String,
    /// HTTP client timeout.
    pub timeout_secs: u64,
    /// Characters of post text kept in an outcome preview.
    pub preview_chars: usize,
    /// Upper bound of the `count` parameter of `wall.get`.
    pub max_fetch_count: u32,
    /// Posts reposted per source when `postCount` is absent.
    pub default_post_count: u32,
}

impl Default for VkSettings {
    fn default() -> Self {
        Self {
            api_host: "https://api.vk.com/method".to_string(),
            api_version: "5.131".to_string(),
            timeout_secs: 30,
            preview_chars: 50,
            max_fetch_count: 100,
            default_post_count: 10,
        }
    }
}

impl VkSettings {
    /// Read the `[vk]` table, then apply the `VK_API_VERSION` override.
    pub fn from_config(config: &RelayConfig) -> Result<Self, Error> {
        #[derive(Default, Deserialize)]
        struct ConfigToml {
            #[serde(default)]
            vk: VkSettings,
        }
        let ConfigToml { mut vk } = config.get()?;
        if let Ok(version) = var("VK_API_VERSION") {
            if !version.trim().is_empty() {
                vk.api_version = version.trim().to_string();
            }
        }
        Ok(vk)
    }
}
