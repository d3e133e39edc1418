// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::Error;
use hyper::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const CONTENT_TYPE: &str = "Content-Type";

/// An API Gateway proxy event, with only the fields the handlers read.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    /// Request body, possibly base 64 encoded.
    pub body: Option<String>,
    /// For example `POST` or `OPTIONS`. Absent means `GET`.
    pub http_method: Option<String>,
    /// Whether `body` is base 64 encoded.
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    /// Build an event from a method and a body.
    pub fn new(method: &str, body: Option<String>) -> Self {
        Self {
            body,
            http_method: Some(method.to_string()),
            is_base64_encoded: false,
        }
    }
}

/// An API Gateway proxy response.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: String,
    /// Present (and `false`) only on successful JSON responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_base64_encoded: Option<bool>,
}

impl GatewayResponse {
    /// Returns the status as a `StatusCode`.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Parses the body as JSON, yielding `Value::Null` for an empty or invalid body.
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

fn json_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (ALLOW_ORIGIN.to_string(), "*".to_string()),
        (CONTENT_TYPE.to_string(), "application/json".to_string()),
    ])
}

/// Create the response to a CORS pre-flight (`OPTIONS`) request.
pub fn create_preflight_response() -> GatewayResponse {
    GatewayResponse {
        status_code: StatusCode::OK.as_u16(),
        headers: BTreeMap::from([
            (ALLOW_ORIGIN.to_string(), "*".to_string()),
            (
                "Access-Control-Allow-Methods".to_string(),
                "POST, OPTIONS".to_string(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                "Content-Type, X-Auth-Token".to_string(),
            ),
            ("Access-Control-Max-Age".to_string(), "86400".to_string()),
        ]),
        body: String::new(),
        is_base64_encoded: None,
    }
}

/// Create a successful JSON response.
pub fn create_json_response(body: &Value) -> GatewayResponse {
    GatewayResponse {
        status_code: StatusCode::OK.as_u16(),
        headers: json_headers(),
        body: body.to_string(),
        is_base64_encoded: Some(false),
    }
}

/// Create a JSON error response of the form `{"error": message}`.
pub fn create_error_response(status: StatusCode, message: &str) -> GatewayResponse {
    GatewayResponse {
        status_code: status.as_u16(),
        headers: json_headers(),
        body: json!({ "error": message }).to_string(),
        is_base64_encoded: None,
    }
}

/// Convert `Error` into a `GatewayResponse`.
impl From<Error> for GatewayResponse {
    fn from(error: Error) -> Self {
        create_error_response(error.status(), &error.to_string())
    }
}
