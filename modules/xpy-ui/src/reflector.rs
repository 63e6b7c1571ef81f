use crate::group::InputGroup;
use crate::notify::Notifier;
use crate::selection::{FileSelectObserver, SelectionEvent};

/// What a reflector did with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reflection {
    /// Text written into the group's display.
    Displayed(String),
    /// No display in the group; text handed to the notifier.
    Notified(String),
    /// No display and nothing to say.
    Skipped,
}

/// Mirrors selection events into an input group's text display.
pub struct SelectionReflector<N: Notifier> {
    group: InputGroup,
    notifier: N,
}

impl<N: Notifier> SelectionReflector<N> {
    pub fn new(group: InputGroup, notifier: N) -> Self {
        Self { group, notifier }
    }

    pub fn group(&self) -> &InputGroup {
        &self.group
    }

    pub fn reflect(&self, event: &SelectionEvent) -> Reflection {
        let text = event.display_text();

        if let Some(display) = self.group.text_display() {
            display.set_value(&text);
            return Reflection::Displayed(text);
        }

        if text.is_empty() {
            return Reflection::Skipped;
        }

        self.notifier.notify(&text);
        Reflection::Notified(text)
    }
}

impl<N: Notifier> FileSelectObserver for SelectionReflector<N> {
    fn on_file_select(&self, event: &SelectionEvent) {
        let reflection = self.reflect(event);
        tracing::debug!(?reflection, "Reflected file selection");
    }
}
