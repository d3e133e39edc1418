// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use hyper::StatusCode;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An enum that encapsulates the error categories of a relay request.
///
/// # Example
///
/// Error::Vendor { code: Some(15), message: Some("Access denied".to_string()) }
pub enum Error {
    /// Configuration could not be read or parsed.
    Config(String),
    /// Connection, DNS, timeout or body read failure talking to a remote host.
    Transport(String),
    /// Anything not anticipated, including a panic inside a handler.
    Unexpected(String),
    /// The request body is malformed or lacks required fields.
    Validation(String),
    /// The vendor answered with an `error` object inside its JSON envelope.
    Vendor {
        /// Value of `error.error_code`, if any.
        code: Option<i64>,
        /// Value of `error.error_msg`, if any.
        message: Option<String>,
    },
}

impl Error {
    /// HTTP status used when this error escapes a handler.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text recorded in an outcome record. A vendor error without `error_msg`
    /// falls back to `default`.
    pub fn outcome_message(&self, default: &str) -> String {
        match self {
            Error::Vendor {
                message: Some(message),
                ..
            } => message.clone(),
            Error::Vendor { message: None, .. } => default.to_string(),
            Error::Transport(s) => s.clone(),
            _ => self.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Config(s) => Display::fmt(&format!("config: {s}"), f),
            Error::Transport(s) | Error::Unexpected(s) | Error::Validation(s) => Display::fmt(s, f),
            Error::Vendor {
                message: Some(message),
                ..
            } => Display::fmt(message, f),
            Error::Vendor {
                code: Some(code),
                message: None,
            } => Display::fmt(&format!("vk error {code}"), f),
            Error::Vendor {
                code: None,
                message: None,
            } => Display::fmt("vk error", f),
        }
    }
}

impl std::error::Error for Error {}
