// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Debug, Formatter};

/// User access token sent as `access_token` with every call.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct AccessToken(pub String);
crate::impl_wrapper_str!(AccessToken);

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Numeric id of a community, without the leading `-`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GroupId(pub String);
crate::impl_wrapper_str!(GroupId);
crate::serde_id_str!(GroupId);

/// Numeric id of a user.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserId(pub String);
crate::impl_wrapper_str!(UserId);
crate::serde_id_str!(UserId);

/// Owner of a wall: positive for users, negative for communities.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OwnerId(pub String);
crate::impl_wrapper_str!(OwnerId);

impl OwnerId {
    /// The wall of community `group_id`.
    pub fn group(group_id: &GroupId) -> Self {
        Self(format!("-{group_id}"))
    }

    /// The wall of user `user_id`.
    pub fn user(user_id: &UserId) -> Self {
        Self(user_id.0.clone())
    }
}

/// Media reference such as `photo-8979575_457255897`, passed as `attachments`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Attachment(pub String);
crate::impl_wrapper_str!(Attachment);

impl Attachment {
    /// A `photo{owner}_{id}` reference.
    pub fn photo(owner_id: i64, id: i64) -> Self {
        Self(format!("photo{owner_id}_{id}"))
    }
}

/// A community to publish or repost into.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", try_from = "RawDestination")]
pub struct Destination {
    /// Community id.
    pub group_id: GroupId,
    /// Display name; the id is shown when absent.
    pub name: Option<String>,
    /// `groupId` exactly as received, echoed back in outcomes.
    #[serde(skip)]
    pub raw_group_id: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDestination {
    #[serde(default)]
    group_id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<RawDestination> for Destination {
    type Error = String;

    fn try_from(raw: RawDestination) -> Result<Self, Self::Error> {
        let raw_group_id = raw.group_id.unwrap_or_else(|| Value::String(String::new()));
        let group_id = match &raw_group_id {
            Value::String(s) => GroupId(s.trim().to_string()),
            Value::Number(n) if n.is_i64() || n.is_u64() => GroupId(n.to_string()),
            other => return Err(format!("invalid groupId {other}, expected a string or an integer")),
        };
        Ok(Self {
            group_id,
            name: raw.name,
            raw_group_id,
        })
    }
}

impl Destination {
    /// Name if present, otherwise `groupId` with its original JSON type.
    pub fn label(&self) -> Value {
        self.name
            .clone()
            .map(Value::String)
            .unwrap_or_else(|| self.raw_group_id.clone())
    }

    /// Name if present, otherwise an empty string.
    pub fn name_or_empty(&self) -> Value {
        Value::String(self.name.clone().unwrap_or_default())
    }
}

/// Text to publish, optionally with an image reference.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContentItem {
    /// Post text.
    #[serde(default)]
    pub text: String,
    /// Raw image URL or a `vk.com` photo/video URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// One post returned by `wall.get`, with only the fields reposting needs.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WallItem {
    /// Post id on the owner's wall.
    pub id: i64,
}
