// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::common::{Error, GatewayEvent, GatewayResponse};
use crate::relay::{handle_event, RelayHandler};
use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use axum::Router;
use clap::Parser;
use hyper::StatusCode;
use std::net::SocketAddr;
use std::sync::Arc;

const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

#[derive(Debug, Parser)]
pub(crate) struct Options {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl Options {
    pub(crate) fn addr(&self) -> Result<SocketAddr, Error> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("{}:{}: {e}", self.host, self.port)))
    }
}

/// Run a handler on incoming requests from a socket, with the same gate as on Lambda.
/// Every path is served.
pub async fn run_handler_on_socket<H: RelayHandler + 'static>(handler: H) -> Result<(), Error> {
    let addr = Options::parse().addr()?;
    let name = handler.name();
    let handler: Arc<dyn RelayHandler> = Arc::new(handler);
    let router = Router::new().fallback(move |request: Request| {
        let handler = Arc::clone(&handler);
        async move { relay_request(handler.as_ref(), request).await }
    });

    tracing::info!("Begin running {name} on socket {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Transport(format!("{addr}: {e}")))?;
    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|e| Error::Transport(format!("{e:?}")))?;
    tracing::info!("Done running {name} on socket");
    Ok(())
}

async fn relay_request(handler: &dyn RelayHandler, request: Request) -> Response {
    let method = request.method().to_string();
    let gateway_response = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            handle_event(handler, GatewayEvent::new(&method, Some(body))).await
        }
        Err(e) => Error::Validation(format!("cannot read body: {e}")).into(),
    };
    into_response(gateway_response)
}

/// Convert a `GatewayResponse` into a `Response` suitable for `axum::Router`.
pub(crate) fn into_response(gateway_response: GatewayResponse) -> Response {
    let status = gateway_response.status();
    let mut builder = Response::builder().status(status);
    for (name, value) in &gateway_response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
        .body(Body::from(gateway_response.body))
        .unwrap_or_else(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
}
