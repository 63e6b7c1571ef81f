//! Styling for server-side form validation errors.

/// Class that marks an error item as an alert.
pub const ALERT_CLASS: &str = "alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    Hidden,
    #[default]
    Block,
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorItem {
    pub message: String,
    classes: Vec<String>,
}

impl ErrorItem {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            classes: Vec::new(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds `class` unless already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

/// The list of validation errors rendered under one form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorList {
    items: Vec<ErrorItem>,
    display: DisplayMode,
}

impl ErrorList {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: messages.into_iter().map(ErrorItem::new).collect(),
            display: DisplayMode::default(),
        }
    }

    pub fn items(&self) -> &[ErrorItem] {
        &self.items
    }

    pub fn display(&self) -> DisplayMode {
        self.display
    }

    /// Mark every item as an alert and lay the list out inline. Idempotent.
    pub fn decorate(&mut self) {
        for item in &mut self.items {
            item.add_class(ALERT_CLASS);
        }
        self.display = DisplayMode::Inline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorate_marks_items_and_shows_inline() {
        let mut list = ErrorList::new(["This field is required.", "Invalid file type."]);
        assert_eq!(list.display(), DisplayMode::Block);

        list.decorate();
        assert_eq!(list.display(), DisplayMode::Inline);
        assert!(list.items().iter().all(|item| item.has_class(ALERT_CLASS)));
    }

    #[test]
    fn decorate_twice_keeps_one_alert_class() {
        let mut list = ErrorList::new(["Invalid file type."]);
        list.decorate();
        list.decorate();
        assert_eq!(list.items()[0].classes(), ["alert".to_string()]);
    }

    #[test]
    fn empty_list_still_goes_inline() {
        let mut list = ErrorList::new(Vec::<String>::new());
        list.decorate();
        assert!(list.items().is_empty());
        assert_eq!(list.display(), DisplayMode::Inline);
    }
}
