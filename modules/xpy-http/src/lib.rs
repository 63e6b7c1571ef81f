//! JSON request dispatcher for the admin API.
//!
//! `RequestDispatcher::dispatch` issues one HTTP call with fixed conventions
//! (JSON accept/content-type, cache busting, a short timeout) and hands back a
//! `PendingCall`. When the call settles its status code is classified and
//! unusual outcomes are written to a `DiagnosticLog`; the outcome itself
//! reaches the caller unchanged.

pub mod dispatch;
pub mod error;
pub mod query;
pub mod status;
pub mod types;

pub use dispatch::{PendingCall, RequestDispatcher};
pub use error::{DispatchError, Result};
pub use query::to_query_pairs;
pub use status::{observe_status, DiagnosticLog, MemoryDiagnostics, StatusOutcome, TracingDiagnostics};
pub use types::{RequestDescriptor, RequestOptions};

pub use reqwest::Method;
