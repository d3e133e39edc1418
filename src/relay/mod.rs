// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Method check, pre-flight and error mapping.
mod gate;
/// The `RelayHandler` trait.
mod handler;
/// Outcome records and the result aggregator.
mod outcome;
/// Publish fan-out.
mod publish;
/// Repost fan-out.
mod repost;

pub use self::gate::handle_event;
pub use self::handler::RelayHandler;
pub use self::outcome::{preview, Outcome, PublishOutcome, RepostOutcome, Summary};
pub use self::publish::{PublishHandler, PublishRequest};
pub use self::repost::{RepostHandler, RepostRequest, Source};
