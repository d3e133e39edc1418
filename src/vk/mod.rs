// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Attachment resolution strategies.
mod attachment;
/// Settings read from the `[vk]` configuration table.
mod settings;
/// Ids and request entities.
mod types;
/// VK API trait.
mod vk_api;
/// VK HTTP client.
mod vk_client;

pub use self::attachment::{parse_attachment_url, upload_photo, AttachmentStrategy};
pub use self::settings::VkSettings;
pub use self::types::{
    AccessToken, Attachment, ContentItem, Destination, GroupId, OwnerId, UserId, WallItem,
};
pub use self::vk_api::VkApi;
pub use self::vk_client::{parse_envelope, VkClient};
