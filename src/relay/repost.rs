// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::handler::{parse_body, to_body};
use super::outcome::{RepostOutcome, Summary};
use super::RelayHandler;
use crate::common::Error;
use crate::log::StringLogger;
use crate::vk::{AccessToken, Destination, GroupId, OwnerId, UserId, VkApi, VkSettings};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

const MISSING_FIELDS: &str = "Missing required fields";
const FETCH_FAILED: &str = "failed to fetch posts";
const NO_POSTS: &str = "no posts to repost";
const REPOST_FAILED: &str = "repost failed";

/// Body of a repost request.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepostRequest {
    /// User access token.
    pub token: AccessToken,
    /// Communities whose walls are read.
    pub source_groups: Vec<GroupId>,
    /// Users whose walls are read.
    pub source_users: Vec<UserId>,
    /// Posts reposted per source; the configured default when absent.
    pub post_count: Option<u32>,
    /// Communities to repost into.
    pub target_groups: Vec<Destination>,
}

/// A wall to read posts from.
#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    /// `-{id}` for communities, `{id}` for users.
    pub owner_id: OwnerId,
    /// Shown as `sourceOwner` in outcomes.
    pub name: String,
}

impl RepostRequest {
    /// Source groups followed by source users.
    pub fn sources(&self) -> Vec<Source> {
        let groups = self.source_groups.iter().map(|group_id| Source {
            owner_id: OwnerId::group(group_id),
            name: format!("Группа {group_id}"),
        });
        let users = self.source_users.iter().map(|user_id| Source {
            owner_id: OwnerId::user(user_id),
            name: format!("Пользователь {user_id}"),
        });
        groups.chain(users).collect()
    }
}

/// Reposts recent posts of every source into every target community.
pub struct RepostHandler {
    api: Arc<dyn VkApi>,
    debug: bool,
    default_post_count: u32,
    max_fetch_count: u32,
}

impl RepostHandler {
    /// Create a repost handler.
    pub fn new(api: Arc<dyn VkApi>, settings: &VkSettings, debug: bool) -> Self {
        Self {
            api,
            debug,
            default_post_count: settings.default_post_count,
            max_fetch_count: settings.max_fetch_count,
        }
    }

    /// Repost sequentially. A source whose wall cannot be read, or is empty,
    /// yields one failure per target and is skipped.
    pub async fn repost(
        &self,
        request: &RepostRequest,
        logger: &StringLogger,
    ) -> Vec<RepostOutcome> {
        let token = &request.token;
        let targets = &request.target_groups;
        let post_count = request.post_count.unwrap_or(self.default_post_count);
        let fetch_count = post_count.min(self.max_fetch_count);
        let mut results = Vec::new();

        for source in request.sources() {
            let fetched = logger.call(
                format!("wall.get from {}", source.owner_id),
                self.api.wall_get(token, &source.owner_id, fetch_count).await,
            );
            let failure = match &fetched {
                Err(e) => Some(e.outcome_message(FETCH_FAILED)),
                Ok(posts) if posts.is_empty() => Some(NO_POSTS.to_string()),
                Ok(_) => None,
            };
            if let Some(error) = failure {
                results.extend(targets.iter().map(|target| {
                    RepostOutcome::failed(
                        source.name.clone(),
                        target.name_or_empty(),
                        error.clone(),
                    )
                }));
                continue;
            }
            let posts = fetched.unwrap_or_default();

            for target in targets {
                for post in posts.iter().take(post_count as usize) {
                    let object = format!("wall{}_{}", source.owner_id, post.id);
                    let result = logger.call(
                        format!("wall.repost of {object} to {}", target.group_id),
                        self.api.wall_repost(token, &object, &target.group_id).await,
                    );
                    results.push(match result {
                        Ok(post_id) => {
                            RepostOutcome::reposted(source.name.clone(), target.label(), post_id)
                        }
                        Err(e) => RepostOutcome::failed(
                            source.name.clone(),
                            target.label(),
                            e.outcome_message(REPOST_FAILED),
                        ),
                    });
                }
            }
        }
        results
    }
}

#[async_trait]
impl RelayHandler for RepostHandler {
    fn name(&self) -> &'static str {
        "vk-repost"
    }

    async fn run(&self, body: Value) -> Result<Value, Error> {
        let request: RepostRequest = parse_body(body)?;
        if request.token.is_empty()
            || request.target_groups.is_empty()
            || (request.source_groups.is_empty() && request.source_users.is_empty())
        {
            return Err(Error::Validation(MISSING_FIELDS.to_string()));
        }
        tracing::info!(
            sources = request.source_groups.len() + request.source_users.len(),
            targets = request.target_groups.len(),
            "{}: reposting",
            self.name()
        );
        let logger = StringLogger::new(self.debug);
        let summary = Summary::from(self.repost(&request, &logger).await);
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
