use std::sync::Arc;

use serde::Serialize;

/// Strip directory components from a path-like control value.
///
/// Backslashes count as separators, so browser values such as
/// `C:\fakepath\export.html` reduce to `export.html`.
pub fn file_label(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.rfind('/') {
        Some(idx) => normalized[idx + 1..].to_string(),
        None => normalized,
    }
}

/// Raw change notification from a file-selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInputChange {
    /// Number of files the platform exposes, if it exposes a list at all.
    pub file_count: Option<usize>,
    /// Path-like value of the control; the first selected file.
    pub value: String,
}

impl FileInputChange {
    /// A change from a platform that exposes no file list.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            file_count: None,
            value: value.into(),
        }
    }

    pub fn with_file_count(mut self, count: usize) -> Self {
        self.file_count = Some(count);
        self
    }

    /// A change carrying the full list of selected paths.
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        Self {
            file_count: Some(paths.len()),
            value: paths
                .first()
                .map(|p| p.as_ref().to_string())
                .unwrap_or_default(),
        }
    }
}

/// "File(s) selected" event emitted for every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    pub file_count: usize,
    pub label: String,
}

impl SelectionEvent {
    pub fn from_change(change: &FileInputChange) -> Self {
        Self {
            file_count: change.file_count.unwrap_or(1),
            label: file_label(&change.value),
        }
    }

    /// Text to show the user: the label for a single file, a count otherwise.
    pub fn display_text(&self) -> String {
        if self.file_count > 1 {
            format!("{} files selected", self.file_count)
        } else {
            self.label.clone()
        }
    }
}

/// Receives `SelectionEvent`s from a `FileInputLabeler`.
pub trait FileSelectObserver: Send + Sync {
    fn on_file_select(&self, event: &SelectionEvent);
}

impl<F> FileSelectObserver for F
where
    F: Fn(&SelectionEvent) + Send + Sync,
{
    fn on_file_select(&self, event: &SelectionEvent) {
        self(event)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Computes selection events for one file control and fans them out.
///
/// Observers are notified synchronously, in subscription order.
#[derive(Default)]
pub struct FileInputLabeler {
    observers: Vec<(SubscriptionId, Arc<dyn FileSelectObserver>)>,
    next_id: u64,
}

impl FileInputLabeler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn FileSelectObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn handle_change(&self, change: &FileInputChange) -> SelectionEvent {
        let event = SelectionEvent::from_change(change);
        tracing::debug!(
            file_count = event.file_count,
            label = %event.label,
            observers = self.observers.len(),
            "File selection changed"
        );
        for (_, observer) in &self.observers {
            observer.on_file_select(&event);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn label_strips_windows_directories() {
        assert_eq!(file_label(r"C:\dir\sub\name.ext"), "name.ext");
    }

    #[test]
    fn label_strips_unix_directories() {
        assert_eq!(file_label("/home/ana/bookmarks.json"), "bookmarks.json");
    }

    #[test]
    fn label_of_bare_name_or_empty() {
        assert_eq!(file_label("name.ext"), "name.ext");
        assert_eq!(file_label(""), "");
        assert_eq!(file_label(r"C:\dir\"), "");
    }

    #[test]
    fn missing_file_list_counts_as_one() {
        let event = SelectionEvent::from_change(&FileInputChange::new(r"C:\fakepath\a.html"));
        assert_eq!(event.file_count, 1);
        assert_eq!(event.label, "a.html");
        assert_eq!(event.display_text(), "a.html");
    }

    #[test]
    fn multiple_files_show_a_count() {
        let change = FileInputChange::from_paths(&["/tmp/a.json", "/tmp/b.json", "/tmp/c.json"]);
        let event = SelectionEvent::from_change(&change);
        assert_eq!(event.file_count, 3);
        assert_eq!(event.label, "a.json");
        assert_eq!(event.display_text(), "3 files selected");
    }

    #[test]
    fn empty_selection_has_empty_text() {
        let event = SelectionEvent::from_change(&FileInputChange::from_paths::<&str>(&[]));
        assert_eq!(event.file_count, 0);
        assert_eq!(event.display_text(), "");
    }

    #[test]
    fn event_serializes_camel_case() {
        let event = SelectionEvent {
            file_count: 2,
            label: "a.json".into(),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({ "fileCount": 2, "label": "a.json" })
        );
    }

    #[test]
    fn observers_run_in_order_until_unsubscribed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut labeler = FileInputLabeler::new();

        let first = {
            let seen = seen.clone();
            labeler.subscribe(Arc::new(move |e: &SelectionEvent| {
                seen.lock().unwrap().push(format!("first:{}", e.label));
            }))
        };
        {
            let seen = seen.clone();
            labeler.subscribe(Arc::new(move |e: &SelectionEvent| {
                seen.lock().unwrap().push(format!("second:{}", e.label));
            }));
        }

        labeler.handle_change(&FileInputChange::new("a.json"));
        assert!(labeler.unsubscribe(first));
        assert!(!labeler.unsubscribe(first));
        labeler.handle_change(&FileInputChange::new("b.json"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:a.json", "second:a.json", "second:b.json"]
        );
        assert_eq!(labeler.observer_count(), 1);
    }
}
