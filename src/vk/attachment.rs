// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{AccessToken, Attachment, GroupId, VkApi};
use crate::common::Error;
use crate::log::StringLogger;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;
use url::Url;

const VENDOR_DOMAINS: [&str; 2] = ["vk.com", "vk.ru"];
const UPLOAD_FIELD: &str = "photo";
const UPLOAD_FILE_NAME: &str = "photo.jpg";

/// How an image reference becomes an attachment.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStrategy {
    /// Extract an existing `photo`/`video` reference from a `vk.com` URL.
    UrlParse,
    /// Download the image and upload it to the destination's wall album.
    Upload,
}

impl AttachmentStrategy {
    /// Resolve `image` for a post on the wall of `group_id`.
    ///
    /// Never fails: `None` means the post goes out text-only.
    pub async fn resolve(
        &self,
        api: &dyn VkApi,
        token: &AccessToken,
        group_id: &GroupId,
        image: &str,
        logger: &StringLogger,
    ) -> Option<Attachment> {
        let image = image.trim();
        if image.is_empty() {
            return None;
        }
        match self {
            AttachmentStrategy::UrlParse => {
                let attachment = parse_attachment_url(image);
                if attachment.is_none() {
                    logger.warn(format!("{image}: no vk media reference, posting text only"));
                }
                attachment
            }
            AttachmentStrategy::Upload => upload_photo(api, token, group_id, image, logger).await,
        }
    }
}

fn photo_regex() -> &'static Regex {
    static PHOTO: OnceLock<Regex> = OnceLock::new();
    PHOTO.get_or_init(|| Regex::new(r"photo(-?\d+)_(\d+)").expect("photo regex"))
}

fn video_regex() -> &'static Regex {
    static VIDEO: OnceLock<Regex> = OnceLock::new();
    VIDEO.get_or_init(|| Regex::new(r"video(-?\d+)_(\d+)").expect("video regex"))
}

fn is_vendor_url(url: &str) -> bool {
    let parsed = Url::parse(url).or_else(|_| Url::parse(&format!("https://{url}")));
    parsed
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase))
        .map(|host| {
            VENDOR_DOMAINS
                .iter()
                .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")))
        })
        .unwrap_or(false)
}

/// Extract `photo{owner}_{id}` or `video{owner}_{id}` from a VK URL.
///
/// For example `https://vk.com/photo-8979575_457255897` yields
/// `photo-8979575_457255897`. Photo references win over video references.
pub fn parse_attachment_url(url: &str) -> Option<Attachment> {
    let url = url.trim();
    if !is_vendor_url(url) {
        return None;
    }
    [("photo", photo_regex()), ("video", video_regex())]
        .into_iter()
        .find_map(|(kind, regex)| {
            regex
                .captures(url)
                .map(|captures| Attachment(format!("{kind}{}_{}", &captures[1], &captures[2])))
        })
}

/// Upload the image at `image_url` to the wall album of `group_id`.
///
/// Any failing step is logged as a warning and yields `None`.
pub async fn upload_photo(
    api: &dyn VkApi,
    token: &AccessToken,
    group_id: &GroupId,
    image_url: &str,
    logger: &StringLogger,
) -> Option<Attachment> {
    match try_upload_photo(api, token, group_id, image_url, logger).await {
        Ok(attachment) => {
            logger.indent(format!("uploaded {image_url} as {attachment}"), "  ");
            Some(attachment)
        }
        Err(e) => {
            logger.warn(format!(
                "upload of {image_url} to group {group_id} failed, posting text only: {e}"
            ));
            None
        }
    }
}

fn malformed(what: &str) -> Error {
    Error::Vendor {
        code: None,
        message: Some(format!("upload response lacks {what}")),
    }
}

async fn try_upload_photo(
    api: &dyn VkApi,
    token: &AccessToken,
    group_id: &GroupId,
    image_url: &str,
    logger: &StringLogger,
) -> Result<Attachment, Error> {
    let upload_url = api
        .get_wall_upload_server(token, group_id)
        .await?
        .ok_or_else(|| malformed("upload_url"))?;
    let bytes = api.download(image_url).await?;
    logger.indent(format!("fetched {} bytes from {image_url}", bytes.len()), "  ");

    let uploaded = api
        .upload(&upload_url, UPLOAD_FIELD, UPLOAD_FILE_NAME, bytes)
        .await?;
    if let Some(error) = uploaded.get("error") {
        return Err(Error::Vendor {
            code: None,
            message: Some(
                error
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| error.to_string()),
            ),
        });
    }
    let server = match uploaded.get("server") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(malformed("server")),
    };
    let photo = uploaded
        .get("photo")
        .and_then(Value::as_str)
        .filter(|photo| !photo.is_empty() && *photo != "[]")
        .ok_or_else(|| malformed("photo"))?;
    let hash = uploaded
        .get("hash")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("hash"))?;

    api.save_wall_photo(token, group_id, &server, photo, hash)
        .await?
        .ok_or_else(|| malformed("owner_id and id"))
}
