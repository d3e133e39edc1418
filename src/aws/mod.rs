// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// A wrapper to run a handler via AWS API Gateway and Lambda Proxy.
mod lambda;
/// Run a handler on incoming requests from a socket.
mod socket;
/// Unit tests.
mod tests;

pub use crate::aws::lambda::{is_lambda_env, run_handler, run_handler_on_lambda};
pub use crate::aws::socket::run_handler_on_socket;
