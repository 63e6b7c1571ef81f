use std::sync::{Arc, Mutex};

/// Shared handle to a single-line text display.
///
/// Clones point at the same display, the way two lookups of one element
/// yield the same node.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: Arc<Mutex<String>>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&self, value: &str) {
        if let Ok(mut current) = self.value.lock() {
            *current = value.to_string();
        }
    }

    pub fn value(&self) -> String {
        self.value
            .lock()
            .map(|current| current.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub enum Control {
    File,
    Text(TextField),
    TextArea(TextField),
    Button(String),
}

/// Controls rendered together as one logical input group.
#[derive(Debug, Clone, Default)]
pub struct InputGroup {
    controls: Vec<Control>,
}

impl InputGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Nearest single-line text display in the group. Text areas don't count.
    pub fn text_display(&self) -> Option<&TextField> {
        self.controls.iter().find_map(|control| match control {
            Control::Text(field) => Some(field),
            _ => None,
        })
    }
}
