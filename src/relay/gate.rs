// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::RelayHandler;
use crate::common::{
    create_error_response, create_json_response, create_preflight_response, Error, GatewayEvent,
    GatewayResponse,
};
use base64::{engine::general_purpose, Engine as _};
use futures::FutureExt;
use hyper::StatusCode;
use serde_json::{json, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Run one gateway event through `handler`.
///
/// `OPTIONS` never reaches the handler, neither does any method but `POST`.
/// Errors and panics are converted into JSON error responses, so this never fails.
pub async fn handle_event(handler: &dyn RelayHandler, event: GatewayEvent) -> GatewayResponse {
    let method = event.http_method.clone().unwrap_or_else(|| "GET".to_string());
    match method.as_str() {
        "OPTIONS" => return create_preflight_response(),
        "POST" => {}
        _ => {
            tracing::info!("{}: {method} not allowed", handler.name());
            return create_error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        }
    }

    let result = AssertUnwindSafe(run_post(handler, event))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(Error::Unexpected(panic_message(panic))));
    match result {
        Ok(body) => create_json_response(&body),
        Err(e @ Error::Validation(_)) => {
            tracing::info!("{}: rejected: {e}", handler.name());
            e.into()
        }
        Err(e) => {
            tracing::error!("{}: failed: {e}", handler.name());
            e.into()
        }
    }
}

async fn run_post(handler: &dyn RelayHandler, event: GatewayEvent) -> Result<Value, Error> {
    let body = decode_body(event)?;
    let body = if body.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str(&body)
            .map_err(|e| Error::Validation(format!("invalid JSON body: {e}")))?
    };
    handler.run(body).await
}

fn decode_body(event: GatewayEvent) -> Result<String, Error> {
    let body = event.body.unwrap_or_default();
    if !event.is_base64_encoded {
        return Ok(body);
    }
    let bytes = general_purpose::STANDARD
        .decode(body.trim())
        .map_err(|e| Error::Validation(format!("invalid base64 body: {e}")))?;
    String::from_utf8(bytes).map_err(|e| Error::Validation(format!("invalid UTF-8 body: {e}")))
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
