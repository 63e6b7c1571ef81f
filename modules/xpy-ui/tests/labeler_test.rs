//! File control → labeler → reflector wiring, as an admin page sets it up.

use std::sync::{Arc, Mutex};

use xpy_ui::{
    Control, FileInputChange, FileInputLabeler, InputGroup, NoopNotifier, SelectionEvent,
    SelectionReflector, TextField, ToastNotifier,
};

#[test]
fn upload_form_mirrors_the_selected_file() {
    let display = TextField::new();
    let group = InputGroup::new()
        .with(Control::Button("Browse".into()))
        .with(Control::File)
        .with(Control::Text(display.clone()));

    let mut labeler = FileInputLabeler::new();
    labeler.subscribe(Arc::new(SelectionReflector::new(group, NoopNotifier)));

    let event = labeler.handle_change(&FileInputChange::new(r"C:\dir\sub\name.ext"));
    assert_eq!(event.label, "name.ext");
    assert_eq!(display.value(), "name.ext");

    labeler.handle_change(&FileInputChange::new(r"C:\fakepath\a.json").with_file_count(3));
    assert_eq!(display.value(), "3 files selected");
}

#[test]
fn control_without_display_falls_back_to_a_toast() {
    let (notifier, mut toasts) = ToastNotifier::channel();
    let mut labeler = FileInputLabeler::new();
    labeler.subscribe(Arc::new(SelectionReflector::new(
        InputGroup::new().with(Control::File),
        notifier,
    )));

    labeler.handle_change(&FileInputChange::from_paths(&["/home/ana/places.sqlite"]));
    assert_eq!(toasts.try_recv().unwrap(), "places.sqlite");
    assert!(toasts.try_recv().is_err());

    labeler.handle_change(&FileInputChange::from_paths::<&str>(&[]));
    assert!(toasts.try_recv().is_err());
}

#[test]
fn other_page_logic_sees_the_same_event() {
    let received: Arc<Mutex<Vec<SelectionEvent>>> = Arc::default();
    let display = TextField::new();

    let mut labeler = FileInputLabeler::new();
    labeler.subscribe(Arc::new(SelectionReflector::new(
        InputGroup::new().with(Control::Text(display.clone())),
        NoopNotifier,
    )));
    {
        let received = received.clone();
        labeler.subscribe(Arc::new(move |event: &SelectionEvent| {
            received.lock().unwrap().push(event.clone());
        }));
    }

    let emitted = labeler.handle_change(&FileInputChange::from_paths(&["a.json", "b.json"]));

    assert_eq!(display.value(), "2 files selected");
    assert_eq!(*received.lock().unwrap(), vec![emitted]);
}
