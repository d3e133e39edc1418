// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! Serverless handlers which relay publish and repost actions to the VK
//! social network on behalf of a user access token.

#[cfg(feature = "aws")]
/// Run handlers on AWS Lambda or on a local socket.
pub mod aws;
#[cfg(feature = "aws")]
pub use aws::*;

/// Types common to multiple handlers.
pub mod common;
pub use common::*;

/// Thread-safe logging.
pub mod log;
pub use log::*;

/// The request gate and the publish and repost handlers.
pub mod relay;
pub use relay::*;

/// Macros used with `serde` serialization and serialization.
pub mod serde_utils;
pub use serde_utils::*;

#[cfg(test)]
mod testing;

/// A wrapper which provides access to the VK API.
pub mod vk;
pub use vk::*;
