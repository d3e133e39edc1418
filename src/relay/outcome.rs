// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::Serialize;
use serde_json::Value;

/// One row of the aggregated result list.
pub trait Outcome {
    /// Whether the vendor accepted the operation.
    fn success(&self) -> bool;
}

/// First `chars` characters of `text`, always followed by `...`.
pub fn preview(text: &str, chars: usize) -> String {
    let mut preview: String = text.chars().take(chars).collect();
    preview.push_str("...");
    preview
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Published {
    Posted { post_id: Option<i64> },
    Failed { error: String },
}

/// Result of publishing one content item to one destination.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublishOutcome {
    /// Destination name, or its id.
    pub group: Value,
    /// Content preview.
    pub post: String,
    success: bool,
    #[serde(flatten)]
    result: Published,
}

impl PublishOutcome {
    /// The vendor accepted the post.
    pub fn posted(group: Value, post: String, post_id: Option<i64>) -> Self {
        Self {
            group,
            post,
            success: true,
            result: Published::Posted { post_id },
        }
    }

    /// The post failed with `error`.
    pub fn failed(group: Value, post: String, error: String) -> Self {
        Self {
            group,
            post,
            success: false,
            result: Published::Failed { error },
        }
    }
}

impl Outcome for PublishOutcome {
    fn success(&self) -> bool {
        self.success
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Reposted {
    Reposted {
        #[serde(rename = "postId")]
        post_id: Option<i64>,
    },
    Failed {
        error: String,
    },
}

/// Result of reposting one source post (or failing a whole source) into one destination.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepostOutcome {
    /// Display name of the source wall.
    pub source_owner: String,
    /// Destination name, or its id; empty when the source failed as a whole.
    pub target_group: Value,
    success: bool,
    #[serde(flatten)]
    result: Reposted,
}

impl RepostOutcome {
    /// The vendor accepted the repost.
    pub fn reposted(source_owner: String, target_group: Value, post_id: Option<i64>) -> Self {
        Self {
            source_owner,
            target_group,
            success: true,
            result: Reposted::Reposted { post_id },
        }
    }

    /// The repost failed with `error`.
    pub fn failed(source_owner: String, target_group: Value, error: String) -> Self {
        Self {
            source_owner,
            target_group,
            success: false,
            result: Reposted::Failed { error },
        }
    }

    /// Vendor-assigned id of the repost.
    #[cfg(test)]
    pub fn post_id(&self) -> Option<i64> {
        match &self.result {
            Reposted::Reposted { post_id } => *post_id,
            Reposted::Failed { .. } => None,
        }
    }
}

impl Outcome for RepostOutcome {
    fn success(&self) -> bool {
        self.success
    }
}

/// The success body: `{results, total, successful}`.
#[derive(Clone, Debug, Serialize)]
pub struct Summary<T> {
    /// Outcomes in nested-iteration order.
    pub results: Vec<T>,
    /// Number of outcomes.
    pub total: usize,
    /// Number of outcomes with `success: true`.
    pub successful: usize,
}

impl<T: Outcome> From<Vec<T>> for Summary<T> {
    fn from(results: Vec<T>) -> Self {
        let successful = results.iter().filter(|outcome| outcome.success()).count();
        Self {
            total: results.len(),
            successful,
            results,
        }
    }
}
