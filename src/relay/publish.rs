// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::handler::{parse_body, to_body};
use super::outcome::{preview, PublishOutcome, Summary};
use super::RelayHandler;
use crate::common::Error;
use crate::log::StringLogger;
use crate::vk::{
    AccessToken, AttachmentStrategy, ContentItem, Destination, OwnerId, VkApi, VkSettings,
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const MISSING_FIELDS: &str = "Missing required fields: token, groups, posts";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Body of a publish request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PublishRequest {
    /// User access token.
    pub token: AccessToken,
    /// Communities to post into.
    pub groups: Vec<Destination>,
    /// Content to post into every community.
    pub posts: Vec<ContentItem>,
}

/// Posts every content item to every destination wall.
pub struct PublishHandler {
    api: Arc<dyn VkApi>,
    debug: bool,
    preview_chars: usize,
    strategy: AttachmentStrategy,
}

impl PublishHandler {
    /// Create a publish handler which resolves images with `strategy`.
    pub fn new(
        api: Arc<dyn VkApi>,
        strategy: AttachmentStrategy,
        settings: &VkSettings,
        debug: bool,
    ) -> Self {
        Self {
            api,
            debug,
            preview_chars: settings.preview_chars,
            strategy,
        }
    }

    /// Publish sequentially; one outcome per (destination, content item) in input order.
    pub async fn publish(
        &self,
        request: &PublishRequest,
        logger: &StringLogger,
    ) -> Vec<PublishOutcome> {
        let token = &request.token;
        let mut results = Vec::with_capacity(request.groups.len() * request.posts.len());
        for group in &request.groups {
            let owner_id = OwnerId::group(&group.group_id);
            for post in &request.posts {
                let attachment = match &post.image {
                    Some(image) => {
                        self.strategy
                            .resolve(self.api.as_ref(), token, &group.group_id, image, logger)
                            .await
                    }
                    None => None,
                };
                let result = logger.call(
                    format!("wall.post to {owner_id}"),
                    self.api
                        .wall_post(token, &owner_id, &post.text, attachment.as_ref())
                        .await,
                );
                let label = group.label();
                let post_preview = preview(&post.text, self.preview_chars);
                results.push(match result {
                    Ok(post_id) => PublishOutcome::posted(label, post_preview, post_id),
                    Err(e) => {
                        PublishOutcome::failed(label, post_preview, e.outcome_message(UNKNOWN_ERROR))
                    }
                });
            }
        }
        results
    }
}

#[async_trait]
impl RelayHandler for PublishHandler {
    fn name(&self) -> &'static str {
        match self.strategy {
            AttachmentStrategy::UrlParse => "vk-publish",
            AttachmentStrategy::Upload => "vk-publish-upload",
        }
    }

    async fn run(&self, body: Value) -> Result<Value, Error> {
        let request: PublishRequest = parse_body(body)?;
        if request.token.is_empty() || request.groups.is_empty() || request.posts.is_empty() {
            return Err(Error::Validation(MISSING_FIELDS.to_string()));
        }
        tracing::info!(
            groups = request.groups.len(),
            posts = request.posts.len(),
            "{}: publishing",
            self.name()
        );
        let logger = StringLogger::new(self.debug);
        let summary = Summary::from(self.publish(&request, &logger).await);
        logger.flush_warnings(self.name());
        tracing::info!(
            total = summary.total,
            successful = summary.successful,
            "{}: done",
            self.name()
        );
        to_body(&summary)
    }
}
