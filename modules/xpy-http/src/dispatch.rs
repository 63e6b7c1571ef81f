use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, Instrument};
use url::Url;
use uuid::Uuid;
use xpy_common::Config;

use crate::error::{DispatchError, Result};
use crate::query::to_query_pairs;
use crate::status::{observe_status, DiagnosticLog, TracingDiagnostics};
use crate::types::{RequestDescriptor, RequestOptions};

const JSON: &str = "application/json";

/// Issues JSON calls against the admin API with fixed conventions.
///
/// Cheap to clone; clones share the underlying connection pool and
/// diagnostics sink.
#[derive(Clone)]
pub struct RequestDispatcher {
    client: reqwest::Client,
    base_url: Option<Url>,
    options: RequestOptions,
    diagnostics: Arc<dyn DiagnosticLog>,
}

impl RequestDispatcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            options: RequestOptions::from_config(config),
            diagnostics: Arc::new(TracingDiagnostics),
        })
    }

    /// Replace the default tracing-backed diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticLog>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Issue one call. `method` falls back to the configured default (GET).
    ///
    /// Returns immediately; the round trip runs on the current tokio runtime.
    /// Failures, including a missing runtime, surface through the returned
    /// `PendingCall`.
    pub fn dispatch(&self, uri: &str, method: Option<Method>, data: Option<Value>) -> PendingCall {
        let mut descriptor = RequestDescriptor::new(uri)
            .with_method(method.unwrap_or_else(|| self.options.method.clone()));
        if let Some(data) = data {
            descriptor = descriptor.with_payload(data);
        }
        self.send(descriptor)
    }

    pub fn send(&self, descriptor: RequestDescriptor) -> PendingCall {
        let call_id = Uuid::new_v4();
        let span = tracing::debug_span!(
            "dispatch",
            %call_id,
            method = %descriptor.method(),
            uri = descriptor.uri()
        );

        let request = self.build_request(&descriptor);
        let client = self.client.clone();
        let diagnostics = self.diagnostics.clone();

        let task = async move {
            let (status, outcome) = match request {
                Ok(request) => execute(&client, request).await,
                Err(e) => (0, Err(e)),
            };
            let classified = observe_status(status, &*diagnostics);
            debug!(status, outcome = ?classified, ok = outcome.is_ok(), "Call settled");
            outcome
        }
        .instrument(span);

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => PendingCall {
                call_id,
                state: CallState::Running(runtime.spawn(task)),
            },
            Err(_) => {
                // Nothing will ever settle this call, so status 0 is observed here.
                observe_status(0, &*self.diagnostics);
                PendingCall {
                    call_id,
                    state: CallState::Failed(Some(DispatchError::NoRuntime)),
                }
            }
        }
    }

    /// Build the outgoing request for `descriptor` without sending it.
    pub fn build_request(&self, descriptor: &RequestDescriptor) -> Result<reqwest::Request> {
        let method = descriptor.method().clone();
        let mut url = self.resolve(descriptor.uri())?;

        let is_query = method == Method::GET;
        if is_query {
            if let Some(payload) = descriptor.payload() {
                append_query(&mut url, payload);
            }
        }

        if !self.options.cache && (method == Method::GET || method == Method::HEAD) {
            let stamp = chrono::Utc::now().timestamp_millis().to_string();
            url.query_pairs_mut().append_pair("_", &stamp);
        }

        let mut builder = self
            .client
            .request(method.clone(), url)
            .header(ACCEPT, JSON)
            .timeout(self.options.timeout);

        // DELETE must not declare a JSON body.
        if method != Method::DELETE {
            builder = builder.header(CONTENT_TYPE, JSON);
        }

        if !is_query {
            if let Some(payload) = descriptor.payload() {
                builder = builder.body(serde_json::to_string(payload)?);
            }
        }

        Ok(builder.build()?)
    }

    fn resolve(&self, uri: &str) -> Result<Url> {
        match Url::parse(uri) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(uri).map_err(|e| DispatchError::InvalidUri {
                    uri: uri.to_string(),
                    message: e.to_string(),
                }),
                None => Err(DispatchError::InvalidUri {
                    uri: uri.to_string(),
                    message: "relative URI and no base URL configured".to_string(),
                }),
            },
            Err(e) => Err(DispatchError::InvalidUri {
                uri: uri.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

fn append_query(url: &mut Url, payload: &Value) {
    if let Value::String(raw) = payload {
        if raw.is_empty() {
            return;
        }
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{raw}"),
            _ => raw.clone(),
        };
        url.set_query(Some(&query));
        return;
    }

    let pairs = to_query_pairs(payload);
    if pairs.is_empty() {
        return;
    }
    let mut query = url.query_pairs_mut();
    for (key, value) in &pairs {
        query.append_pair(key, value);
    }
}

/// Send `request` and read a JSON body. Returns the status code alongside the
/// outcome; 0 when no response arrived.
async fn execute(client: &reqwest::Client, request: reqwest::Request) -> (u16, Result<Value>) {
    let resp = match client.execute(request).await {
        Ok(resp) => resp,
        Err(e) => return (0, Err(e.into())),
    };

    let status = resp.status();
    let code = status.as_u16();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return (code, Err(DispatchError::Api { status: code, message }));
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => return (code, Err(e.into())),
    };
    if body.trim().is_empty() {
        return (code, Ok(Value::Null));
    }
    (code, serde_json::from_str(&body).map_err(DispatchError::from))
}

enum CallState {
    Running(JoinHandle<Result<Value>>),
    Failed(Option<DispatchError>),
}

/// Handle to an in-flight call. Await it for the parsed JSON body.
pub struct PendingCall {
    call_id: Uuid,
    state: CallState,
}

impl PendingCall {
    pub fn call_id(&self) -> Uuid {
        self.call_id
    }

    /// Cancel the call. Awaiting afterwards yields `DispatchError::Aborted`.
    pub fn abort(&self) {
        if let CallState::Running(handle) = &self.state {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        match &self.state {
            CallState::Running(handle) => handle.is_finished(),
            CallState::Failed(_) => true,
        }
    }

    /// Await the call and deserialise its body into `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let value = self.await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Future for PendingCall {
    type Output = Result<Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match &mut this.state {
            CallState::Running(handle) => match Pin::new(handle).poll(cx) {
                Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
                Poll::Ready(Err(e)) if e.is_cancelled() => Poll::Ready(Err(DispatchError::Aborted)),
                Poll::Ready(Err(e)) => {
                    Poll::Ready(Err(DispatchError::Network(format!("dispatch task failed: {e}"))))
                }
                Poll::Pending => Poll::Pending,
            },
            CallState::Failed(err) => {
                Poll::Ready(Err(err.take().unwrap_or(DispatchError::Aborted)))
            }
        }
    }
}
