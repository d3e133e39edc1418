// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::run_handler_on_socket;
use crate::common::{GatewayEvent, GatewayResponse};
use crate::relay::{handle_event, RelayHandler};
use core::future::Future;
use core::task::{Context, Poll};
use lambda_runtime::{Error, LambdaEvent, Service};
use std::convert::Infallible;
use std::env::var;
use std::pin::Pin;
use std::sync::Arc;

/// Returns true when executable is run in AWS Lambda environment.
pub fn is_lambda_env() -> bool {
    var("AWS_LAMBDA_RUNTIME_API").is_ok()
}

/// Run `handler` on Lambda when deployed there, otherwise on a local socket.
pub async fn run_handler<H: RelayHandler + 'static>(handler: H) -> Result<(), Error> {
    if is_lambda_env() {
        run_handler_on_lambda(handler).await
    } else {
        run_handler_on_socket(handler).await?;
        Ok(())
    }
}

/// Run a handler on a Lambda Proxy invoked via AWS API Gateway.
pub async fn run_handler_on_lambda<H: RelayHandler + 'static>(handler: H) -> Result<(), Error> {
    let name = handler.name();
    tracing::info!("Begin running {name} on lambda");
    lambda_runtime::run(HandlerWrapper(Arc::new(handler))).await?;
    tracing::info!("Done running {name} on lambda");
    Ok(())
}

/// The `HandlerWrapper` struct feeds API Gateway events through the request
/// gate and hands the gateway response back to the runtime as JSON.
struct HandlerWrapper<H>(Arc<H>);

impl<H: RelayHandler + 'static> Service<LambdaEvent<GatewayEvent>> for HandlerWrapper<H> {
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<GatewayResponse, Infallible>> + Send>>;
    type Response = GatewayResponse;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, lambda_event: LambdaEvent<GatewayEvent>) -> Self::Future {
        let handler = Arc::clone(&self.0);
        let (event, context) = lambda_event.into_parts();
        Box::pin(async move {
            tracing::debug!(
                request_id = %context.request_id,
                method = event.http_method.as_deref().unwrap_or("GET"),
                "{} invoked",
                handler.name()
            );
            let response = handle_event(handler.as_ref(), event).await;
            if response.status_code >= 500 {
                tracing::warn!(
                    request_id = %context.request_id,
                    "{} ends with status {}: {}",
                    handler.name(),
                    response.status_code,
                    response.body
                );
            }
            Ok(response)
        })
    }
}
