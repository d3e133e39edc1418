// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Publish posts to VK community walls, with images uploaded to the community wall from their URLs.

use std::sync::Arc;
use vk_relay::{
    init_tracing, run_handler, AttachmentStrategy, PublishHandler, RelayConfig, VkClient,
    VkSettings,
};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    init_tracing("info");
    let config = RelayConfig::load()?;
    let settings = VkSettings::from_config(&config)?;
    let api = Arc::new(VkClient::with_settings(settings.clone(), config.debug())?);
    let handler = PublishHandler::new(api, AttachmentStrategy::Upload, &settings, config.debug());
    run_handler(handler).await
}
