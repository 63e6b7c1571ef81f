use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use xpy_common::config::{Config, DEFAULT_REQUEST_TIMEOUT};

use crate::error::Result;

/// Defaults applied to every dispatched call.
///
/// `{ method: GET, timeout: 1000ms, cache: false }` unless built from a
/// `Config` that says otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub timeout: Duration,
    pub cache: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            cache: false,
        }
    }
}

impl RequestOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.request_timeout,
            cache: !config.disable_cache,
            ..Self::default()
        }
    }
}

/// One call to issue: where, how, and with what payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    uri: String,
    method: Method,
    payload: Option<Value>,
}

impl RequestDescriptor {
    /// A GET to `uri` with no payload.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            method: Method::GET,
            payload: None,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach any serialisable payload.
    pub fn with_data<T: Serialize>(self, data: &T) -> Result<Self> {
        Ok(self.with_payload(serde_json::to_value(data)?))
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_default_to_get_one_second_no_cache() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert_eq!(options.timeout, Duration::from_millis(1000));
        assert!(!options.cache);
    }

    #[test]
    fn options_follow_config() {
        let config = Config {
            request_timeout: Duration::from_millis(250),
            disable_cache: false,
            ..Config::default()
        };
        let options = RequestOptions::from_config(&config);
        assert_eq!(options.timeout, Duration::from_millis(250));
        assert!(options.cache);
        assert_eq!(options.method, Method::GET);
    }

    #[test]
    fn descriptor_defaults_to_get_without_payload() {
        let descriptor = RequestDescriptor::new("/admin/files");
        assert_eq!(descriptor.method(), &Method::GET);
        assert!(descriptor.payload().is_none());
    }

    #[derive(Serialize)]
    struct Rename {
        filename: String,
    }

    #[test]
    fn with_data_serialises_structs() {
        let descriptor = RequestDescriptor::new("/admin/files/rename")
            .with_method(Method::PUT)
            .with_data(&Rename {
                filename: "export.html".into(),
            })
            .unwrap();
        assert_eq!(descriptor.payload(), Some(&json!({"filename": "export.html"})));
    }
}
