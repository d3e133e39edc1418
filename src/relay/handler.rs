// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::Error;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A stateless handler for the JSON body of a `POST`.
#[async_trait]
pub trait RelayHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Validate `body` and perform the relay. `Error::Validation` becomes a 400,
    /// any other error a 500.
    async fn run(&self, body: Value) -> Result<Value, Error>;
}

pub(crate) fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, Error> {
    serde_json::from_value(body)
        .map_err(|e| Error::Validation(format!("invalid request body: {e}")))
}

pub(crate) fn to_body<T: Serialize>(summary: &T) -> Result<Value, Error> {
    serde_json::to_value(summary).map_err(|e| Error::Unexpected(format!("serialize: {e}")))
}
