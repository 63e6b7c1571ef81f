use tokio::sync::mpsc;

/// Surfaces a message to the user without blocking the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Queues messages as toasts for the page to render.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    tx: mpsc::UnboundedSender<String>,
}

impl ToastNotifier {
    /// Create a notifier and the receiving end of its toast queue.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        tracing::debug!(message, "Queueing toast");
        if self.tx.send(message.to_string()).is_err() {
            tracing::warn!(message, "Toast queue closed, dropping notification");
        }
    }
}

/// Emits messages as `info` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "xpy_ui::notify", "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_is_queued() {
        let (notifier, mut rx) = ToastNotifier::channel();
        notifier.notify("a.json");
        assert_eq!(rx.try_recv().unwrap(), "a.json");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_queue_does_not_panic() {
        let (notifier, rx) = ToastNotifier::channel();
        drop(rx);
        notifier.notify("a.json");
    }
}
