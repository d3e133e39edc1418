// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod config;
/// An enum that encapsulates the error categories of a relay request.
mod error;
mod http;
/// Unit tests.
mod tests;

pub use self::config::{RelayConfig, RelayConfigBuilder};
pub use self::error::Error;
pub use self::http::{
    create_error_response, create_json_response, create_preflight_response, GatewayEvent,
    GatewayResponse,
};
