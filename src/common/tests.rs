// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod common_tests {
    use crate::common::{
        create_error_response, create_preflight_response, Error, GatewayResponse, RelayConfig,
    };
    use hyper::StatusCode;
    use serde::Deserialize;

    #[test]
    fn config_tests() {
        #[derive(Deserialize)]
        struct Section {
            api_version: String,
        }
        #[derive(Deserialize)]
        struct ConfigToml {
            vk: Section,
        }
        let config = RelayConfig::builder()
            .toml_str(
                r#"
                [vk]
                api_version = "5.199"
                "#,
            )
            .debug(true)
            .build();
        assert!(config.debug());
        let ConfigToml { vk } = config.get().expect("config_tests.toml");
        assert_eq!(vk.api_version, "5.199");

        let broken = RelayConfig::builder().toml_str("[vk").build();
        assert!(matches!(broken.get::<toml::Table>(), Err(Error::Config(_))));

        let missing = RelayConfig::builder()
            .toml_file("no-such-vk-relay-config.toml")
            .build();
        assert!(!missing.debug());
        assert!(missing.get::<toml::Table>().expect("empty").is_empty());
    }

    #[test]
    fn error_tests() {
        let vendor = Error::Vendor {
            code: Some(15),
            message: Some("Access denied".to_string()),
        };
        assert_eq!(vendor.to_string(), "Access denied");
        assert_eq!(vendor.outcome_message("Unknown error"), "Access denied");
        assert_eq!(vendor.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let silent = Error::Vendor {
            code: Some(5),
            message: None,
        };
        assert_eq!(silent.outcome_message("Unknown error"), "Unknown error");
        assert_eq!(silent.to_string(), "vk error 5");

        let transport = Error::Transport("dns error".to_string());
        assert_eq!(transport.outcome_message("Unknown error"), "dns error");
        assert_eq!(transport.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let validation = Error::Validation("Missing required fields".to_string());
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn http_tests() {
        let preflight = create_preflight_response();
        assert_eq!(preflight.status_code, 200);
        assert!(preflight.body.is_empty());
        assert_eq!(
            preflight.headers.get("Access-Control-Allow-Methods").map(String::as_str),
            Some("POST, OPTIONS")
        );
        assert_eq!(
            preflight.headers.get("Access-Control-Max-Age").map(String::as_str),
            Some("86400")
        );

        let error = create_error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        assert_eq!(error.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(error.json_body()["error"], "Method not allowed");
        assert_eq!(
            error.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );

        let from_error: GatewayResponse = Error::Unexpected("boom".to_string()).into();
        assert_eq!(from_error.status_code, 500);
        assert_eq!(from_error.json_body()["error"], "boom");

        let serialized = serde_json::to_value(&error).expect("serialize");
        assert_eq!(serialized["statusCode"], 405);
        assert!(serialized.get("isBase64Encoded").is_none());
    }
}
