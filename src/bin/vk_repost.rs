// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Repost recent posts of VK communities and users into VK communities.

use std::sync::Arc;
use vk_relay::{init_tracing, run_handler, RelayConfig, RepostHandler, VkClient, VkSettings};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    init_tracing("info");
    let config = RelayConfig::load()?;
    let settings = VkSettings::from_config(&config)?;
    let api = Arc::new(VkClient::with_settings(settings.clone(), config.debug())?);
    run_handler(RepostHandler::new(api, &settings, config.debug())).await
}
