//! Admin page behaviors, modeled without a DOM.
//!
//! A `FileInputLabeler` turns file-control change events into
//! `SelectionEvent`s and hands them to explicitly subscribed observers. The
//! stock observer, `SelectionReflector`, writes the label into its input
//! group's text display or falls back to a `Notifier`.

pub mod form_errors;
pub mod group;
pub mod notify;
pub mod reflector;
pub mod selection;

pub use form_errors::{DisplayMode, ErrorItem, ErrorList, ALERT_CLASS};
pub use group::{Control, InputGroup, TextField};
pub use notify::{NoopNotifier, Notifier, ToastNotifier, TracingNotifier};
pub use reflector::{Reflection, SelectionReflector};
pub use selection::{
    file_label, FileInputChange, FileInputLabeler, FileSelectObserver, SelectionEvent,
    SubscriptionId,
};
