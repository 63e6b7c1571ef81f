use std::sync::Mutex;

/// Classification of a settled call's status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// No response arrived (connection refused, timeout, aborted).
    NoResponse,
    Success,
    BadRequest,
    Forbidden,
    NotFound,
    Other(u16),
}

impl StatusOutcome {
    pub fn classify(code: u16) -> Self {
        match code {
            0 => StatusOutcome::NoResponse,
            200 => StatusOutcome::Success,
            400 => StatusOutcome::BadRequest,
            403 => StatusOutcome::Forbidden,
            404 => StatusOutcome::NotFound,
            other => StatusOutcome::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            StatusOutcome::NoResponse => 0,
            StatusOutcome::Success => 200,
            StatusOutcome::BadRequest => 400,
            StatusOutcome::Forbidden => 403,
            StatusOutcome::NotFound => 404,
            StatusOutcome::Other(code) => *code,
        }
    }

    /// Diagnostic line for outcomes worth logging. `None` for outcomes that are
    /// swallowed silently.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            StatusOutcome::BadRequest => Some("Request error: Bad request.".to_string()),
            StatusOutcome::Other(code) => Some(format!("Request returned error: {code}")),
            _ => None,
        }
    }
}

/// Side-effecting sink for dispatch diagnostics. Never propagates anything.
pub trait DiagnosticLog: Send + Sync {
    fn record(&self, message: &str);
}

/// Writes diagnostics as `warn` events under the `xpy_http::diagnostics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticLog for TracingDiagnostics {
    fn record(&self, message: &str) {
        tracing::warn!(target: "xpy_http::diagnostics", "{message}");
    }
}

/// In-memory diagnostics sink for tests. Share it via `Arc` to assert on it.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticLog for MemoryDiagnostics {
    fn record(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(message.to_string());
        }
    }
}

/// Classify `code` and write its diagnostic, if any, to `log`.
pub fn observe_status(code: u16, log: &dyn DiagnosticLog) -> StatusOutcome {
    let outcome = StatusOutcome::classify(code);
    if let Some(message) = outcome.diagnostic() {
        log.record(&message);
    }
    outcome
}
