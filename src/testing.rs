// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

//! A scripted in-memory `VkApi` which records every call.

use crate::common::Error;
use crate::vk::{AccessToken, VkApi};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;

type CallResponder = dyn Fn(&str, &BTreeMap<String, String>) -> Result<Value, Error> + Send + Sync;
type DownloadResponder = dyn Fn(&str) -> Result<Vec<u8>, Error> + Send + Sync;
type UploadResponder = dyn Fn(&str, &[u8]) -> Result<Value, Error> + Send + Sync;

/// One recorded request. `download` and `upload` are recorded with those method names.
#[derive(Clone, Debug)]
pub(crate) struct FakeCall {
    pub method: String,
    pub params: BTreeMap<String, String>,
}

pub(crate) struct FakeVk {
    calls: Mutex<Vec<FakeCall>>,
    on_call: Box<CallResponder>,
    on_download: Box<DownloadResponder>,
    on_upload: Box<UploadResponder>,
}

impl FakeVk {
    pub fn new(
        on_call: impl Fn(&str, &BTreeMap<String, String>) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            on_call: Box::new(on_call),
            on_download: Box::new(|_| Ok(vec![0xff, 0xd8, 0xff])),
            on_upload: Box::new(|_, _| {
                Ok(json!({ "server": 829, "photo": "[{\"photo\":\"abc\"}]", "hash": "f00d" }))
            }),
        }
    }

    pub fn on_download(
        mut self,
        on_download: impl Fn(&str) -> Result<Vec<u8>, Error> + Send + Sync + 'static,
    ) -> Self {
        self.on_download = Box::new(on_download);
        self
    }

    pub fn on_upload(
        mut self,
        on_upload: impl Fn(&str, &[u8]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        self.on_upload = Box::new(on_upload);
        self
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().expect("calls").clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.method).collect()
    }

    fn record(&self, method: &str, params: BTreeMap<String, String>) {
        self.calls.lock().expect("calls").push(FakeCall {
            method: method.to_string(),
            params,
        });
    }
}

/// A vendor error as `parse_envelope` would report it.
pub(crate) fn vendor_error(code: i64, message: &str) -> Error {
    Error::Vendor {
        code: Some(code),
        message: Some(message.to_string()),
    }
}

#[async_trait]
impl VkApi for FakeVk {
    async fn call(
        &self,
        method: &str,
        token: &AccessToken,
        params: &[(&str, String)],
    ) -> Result<Value, Error> {
        let mut recorded: BTreeMap<String, String> = params
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        recorded.insert("access_token".to_string(), token.to_string());
        let result = (self.on_call)(method, &recorded);
        self.record(method, recorded);
        result
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, Error> {
        self.record("download", BTreeMap::from([("url".to_string(), url.to_string())]));
        (self.on_download)(url)
    }

    async fn upload(
        &self,
        upload_url: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, Error> {
        self.record(
            "upload",
            BTreeMap::from([
                ("url".to_string(), upload_url.to_string()),
                ("field".to_string(), field.to_string()),
                ("file_name".to_string(), file_name.to_string()),
            ]),
        );
        (self.on_upload)(upload_url, &bytes)
    }
}
