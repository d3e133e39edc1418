// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod aws_tests {
    use crate::aws::socket::{into_response, Options};
    use crate::common::{create_json_response, create_preflight_response, Error, GatewayResponse};
    use axum::body::to_bytes;
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn options_tests() {
        let options = Options::try_parse_from(["vk-repost"]).expect("defaults");
        assert_eq!(options.host, "127.0.0.1");
        assert_eq!(options.port, 8080);
        assert_eq!(options.addr().unwrap().to_string(), "127.0.0.1:8080");

        let options =
            Options::try_parse_from(["vk-repost", "--host", "0.0.0.0", "--port", "9000"]).unwrap();
        assert_eq!(options.addr().unwrap().port(), 9000);

        let options = Options::try_parse_from(["vk-repost", "--host", "not a host"]).unwrap();
        assert!(matches!(options.addr(), Err(Error::Config(_))));

        assert!(Options::try_parse_from(["vk-repost", "--port", "http"]).is_err());
    }

    #[tokio::test]
    async fn into_response_tests() {
        let response = into_response(create_preflight_response());
        assert_eq!(response.status(), 200);
        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
        assert_eq!(headers["Access-Control-Max-Age"], "86400");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());

        let response = into_response(create_json_response(&json!({"total": 0})));
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["total"], 0);

        let response = into_response(GatewayResponse::from(Error::Validation(
            "Missing required fields".to_string(),
        )));
        assert_eq!(response.status(), 400);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Missing required fields"}"#);
    }
}
