// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{AccessToken, VkApi, VkSettings};
use crate::common::{Error, RelayConfig};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// VK HTTP client.
pub struct VkClient {
    client: Client,
    debug: bool,
    settings: VkSettings,
}

impl VkClient {
    /// Create a VK client from the `[vk]` configuration table.
    pub fn new(config: &RelayConfig) -> Result<Self, Error> {
        let settings = VkSettings::from_config(config)?;
        Self::with_settings(settings, config.debug())
    }

    /// Create a VK client from explicit settings.
    pub fn with_settings(settings: VkSettings, debug: bool) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(Self::map_error)?;
        Ok(Self {
            client,
            debug,
            settings,
        })
    }

    /// Settings this client was built with.
    pub fn settings(&self) -> &VkSettings {
        &self.settings
    }

    /// The request URL carries `access_token`, so it never reaches the error text.
    fn map_error(e: reqwest::Error) -> Error {
        Error::Transport(e.without_url().to_string())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.settings.api_host.trim_end_matches('/'))
    }
}

/// Decode a VK JSON envelope.
///
/// The API reports failures inside `200 OK` bodies, so the presence of an
/// `error` key is the only failure signal. A body without `response` yields
/// `Value::Null`.
pub fn parse_envelope(text: &str) -> Result<Value, Error> {
    let mut envelope: Value = serde_json::from_str(text).map_err(|e| Error::Vendor {
        code: None,
        message: Some(format!("cannot parse vk response: {e}")),
    })?;
    if let Some(error) = envelope.get("error") {
        return Err(Error::Vendor {
            code: error.get("error_code").and_then(Value::as_i64),
            message: error
                .get("error_msg")
                .and_then(Value::as_str)
                .map(str::to_string),
        });
    }
    Ok(envelope
        .get_mut("response")
        .map(Value::take)
        .unwrap_or(Value::Null))
}

#[async_trait]
impl VkApi for VkClient {
    async fn call(
        &self,
        method: &str,
        token: &AccessToken,
        params: &[(&str, String)],
    ) -> Result<Value, Error> {
        if self.debug {
            let names: Vec<_> = params.iter().map(|(name, _)| *name).collect();
            tracing::debug!(method, ?names, "vk call");
        }
        let response = self
            .client
            .get(self.method_url(method))
            .query(params)
            .query(&[
                ("access_token", token.as_str()),
                ("v", self.settings.api_version.as_str()),
            ])
            .send()
            .await
            .map_err(Self::map_error)?;
        let text = response.text().await.map_err(Self::map_error)?;
        parse_envelope(&text)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Self::map_error)?;
        let bytes = response.bytes().await.map_err(Self::map_error)?;
        if self.debug {
            tracing::debug!("downloaded {} bytes from {url}", bytes.len());
        }
        Ok(bytes.to_vec())
    }

    async fn upload(
        &self,
        upload_url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, Error> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part(field.to_string(), part);
        let response = self
            .client
            .post(upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(Self::map_error)?;
        let text = response.text().await.map_err(Self::map_error)?;
        serde_json::from_str(&text).map_err(|e| Error::Vendor {
            code: None,
            message: Some(format!("cannot parse upload response: {e}")),
        })
    }
}
