// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{AccessToken, Attachment, GroupId, OwnerId, WallItem};
use crate::common::Error;
use async_trait::async_trait;
use serde_json::Value;

/// Access to the VK HTTP API.
///
/// Implementors provide the three transport primitives; the wall and photo
/// methods are built on top of them.
#[async_trait]
pub trait VkApi: Send + Sync {
    /// Call `method` with `params`. Returns the `response` value of the
    /// envelope, or `Error::Vendor` if the envelope contains `error`.
    async fn call(
        &self,
        method: &str,
        token: &AccessToken,
        params: &[(&str, String)],
    ) -> Result<Value, Error>;

    /// Fetch the raw bytes at `url`.
    async fn download(&self, url: &str) -> Result<Vec<u8>, Error>;

    /// Post `bytes` as a multipart file field to `upload_url` and decode the JSON reply.
    async fn upload(
        &self,
        upload_url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, Error>;

    /// `wall.post`. Returns the new `post_id`, if reported.
    async fn wall_post(
        &self,
        token: &AccessToken,
        owner_id: &OwnerId,
        message: &str,
        attachment: Option<&Attachment>,
    ) -> Result<Option<i64>, Error> {
        let mut params = vec![
            ("owner_id", owner_id.to_string()),
            ("message", message.to_string()),
        ];
        if let Some(attachment) = attachment {
            params.push(("attachments", attachment.to_string()));
        }
        let response = self.call("wall.post", token, &params).await?;
        Ok(response.get("post_id").and_then(Value::as_i64))
    }

    /// `wall.get`. Items without an `id` are skipped.
    async fn wall_get(
        &self,
        token: &AccessToken,
        owner_id: &OwnerId,
        count: u32,
    ) -> Result<Vec<WallItem>, Error> {
        let params = [
            ("owner_id", owner_id.to_string()),
            ("count", count.to_string()),
        ];
        let response = self.call("wall.get", token, &params).await?;
        Ok(response
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("id").and_then(Value::as_i64))
                    .map(|id| WallItem { id })
                    .collect()
            })
            .unwrap_or_default())
    }

    /// `wall.repost` of `object` (e.g. `wall-1_2`) into community `group_id`.
    async fn wall_repost(
        &self,
        token: &AccessToken,
        object: &str,
        group_id: &GroupId,
    ) -> Result<Option<i64>, Error> {
        let params = [
            ("object", object.to_string()),
            ("group_id", group_id.to_string()),
        ];
        let response = self.call("wall.repost", token, &params).await?;
        Ok(response.get("post_id").and_then(Value::as_i64))
    }

    /// `photos.getWallUploadServer`. Returns `upload_url`, if reported.
    async fn get_wall_upload_server(
        &self,
        token: &AccessToken,
        group_id: &GroupId,
    ) -> Result<Option<String>, Error> {
        let params = [("group_id", group_id.to_string())];
        let response = self
            .call("photos.getWallUploadServer", token, &params)
            .await?;
        Ok(response
            .get("upload_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string))
    }

    /// `photos.saveWallPhoto`. Returns the `photo{owner_id}_{id}` reference of
    /// the first saved photo, if reported.
    async fn save_wall_photo(
        &self,
        token: &AccessToken,
        group_id: &GroupId,
        server: &str,
        photo: &str,
        hash: &str,
    ) -> Result<Option<Attachment>, Error> {
        let params = [
            ("group_id", group_id.to_string()),
            ("server", server.to_string()),
            ("photo", photo.to_string()),
            ("hash", hash.to_string()),
        ];
        let response = self.call("photos.saveWallPhoto", token, &params).await?;
        Ok(response.get(0).and_then(|saved| {
            let owner_id = saved.get("owner_id").and_then(Value::as_i64)?;
            let id = saved.get("id").and_then(Value::as_i64)?;
            Some(Attachment::photo(owner_id, id))
        }))
    }
}
