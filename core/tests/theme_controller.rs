use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{
    MemoryStore, PreferenceStore, Presentation, PresentationSink, StoreError, Theme,
    ThemeController, THEME_STORAGE_KEY,
};

#[derive(Default)]
struct RecordingSink {
    applied: RefCell<Vec<(Theme, Presentation)>>,
}

impl RecordingSink {
    fn last(&self) -> Option<(Theme, Presentation)> {
        self.applied.borrow().last().copied()
    }

    fn count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl PresentationSink for RecordingSink {
    fn apply_presentation(&self, theme: Theme, presentation: &Presentation) {
        self.applied.borrow_mut().push((theme, *presentation));
    }
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

fn build(
    store: Rc<MemoryStore>,
    hint: Option<Theme>,
) -> (ThemeController, Rc<RecordingSink>) {
    let sink = Rc::new(RecordingSink::default());
    let controller = ThemeController::new(Box::new(store), Box::new(hint), Box::new(sink.clone()));
    (controller, sink)
}

#[test]
fn nothing_applied_before_initialize() {
    let (controller, sink) = build(Rc::new(MemoryStore::new()), None);
    assert!(!controller.is_ready());
    assert_eq!(sink.count(), 0);
}

#[test]
fn falls_back_to_os_hint_then_dark() {
    let (controller, sink) = build(Rc::new(MemoryStore::new()), Some(Theme::Light));
    assert_eq!(controller.initialize(), Theme::Light);
    assert!(controller.is_ready());
    assert_eq!(sink.last().map(|(theme, _)| theme), Some(Theme::Light));

    let (controller, _) = build(Rc::new(MemoryStore::new()), Some(Theme::Dark));
    assert_eq!(controller.initialize(), Theme::Dark);

    let (controller, _) = build(Rc::new(MemoryStore::new()), None);
    assert_eq!(controller.initialize(), Theme::Dark);
}

#[test]
fn persisted_value_wins_over_hint() {
    let store = Rc::new(MemoryStore::with_value(THEME_STORAGE_KEY, "light"));
    let (controller, _) = build(store, Some(Theme::Dark));
    assert_eq!(controller.initialize(), Theme::Light);
}

#[test]
fn unknown_persisted_value_is_ignored() {
    let store = Rc::new(MemoryStore::with_value(THEME_STORAGE_KEY, "sepia"));
    let (controller, _) = build(store, Some(Theme::Light));
    assert_eq!(controller.initialize(), Theme::Light);
}

#[test]
fn initialize_is_idempotent() {
    let (controller, sink) = build(Rc::new(MemoryStore::new()), Some(Theme::Light));
    controller.initialize();
    controller.initialize();
    assert_eq!(sink.count(), 1);
    assert_eq!(controller.theme(), Theme::Light);
}

#[test]
fn toggle_twice_round_trips_and_persists() {
    let store = Rc::new(MemoryStore::new());
    let (controller, sink) = build(store.clone(), None);
    let original = controller.initialize();

    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(store.load(THEME_STORAGE_KEY), Ok(Some("light".to_string())));
    assert_eq!(sink.last().map(|(theme, _)| theme), Some(Theme::Light));

    assert_eq!(controller.toggle(), original);
    assert_eq!(store.load(THEME_STORAGE_KEY), Ok(Some("dark".to_string())));
    assert_eq!(sink.last().map(|(theme, _)| theme), Some(original));
}

#[test]
fn toggle_before_initialize_resolves_first() {
    let store = Rc::new(MemoryStore::with_value(THEME_STORAGE_KEY, "light"));
    let (controller, _) = build(store, None);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert!(controller.is_ready());
}

#[test]
fn apply_twice_gives_same_presentation() {
    let (controller, sink) = build(Rc::new(MemoryStore::new()), None);
    controller.apply(Theme::Dark);
    let once = sink.last();
    controller.apply(Theme::Dark);
    assert_eq!(sink.last(), once);
    let (_, presentation) = once.unwrap();
    assert_eq!(presentation.background, "#050510");
    assert_eq!(presentation.foreground, "#f8fafc");
}

#[test]
fn light_presentation_colors() {
    let presentation = Theme::Light.presentation();
    assert_eq!(presentation.class_name, "light");
    assert_eq!(presentation.background, "#f8fafc");
    assert_eq!(presentation.foreground, "#0f172a");
}

#[test]
fn broken_store_keeps_session_theme() {
    let sink = Rc::new(RecordingSink::default());
    let controller = ThemeController::new(
        Box::new(BrokenStore),
        Box::new(Some(Theme::Light)),
        Box::new(sink.clone()),
    );
    assert_eq!(controller.initialize(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(sink.last().map(|(theme, _)| theme), Some(Theme::Dark));
}

#[test]
fn subscribers_hear_changes_until_dropped() {
    let (controller, _) = build(Rc::new(MemoryStore::new()), None);
    let heard = Rc::new(RefCell::new(Vec::new()));
    let calls = Rc::new(Cell::new(0));
    let subscription = {
        let heard = heard.clone();
        let calls = calls.clone();
        controller.subscribe(Rc::new(move |theme| {
            heard.borrow_mut().push(theme);
            calls.set(calls.get() + 1);
        }))
    };
    controller.initialize();
    controller.toggle();
    assert_eq!(*heard.borrow(), vec![Theme::Dark, Theme::Light]);

    drop(subscription);
    controller.toggle();
    assert_eq!(calls.get(), 2);
}

#[test]
fn parses_stored_strings() {
    assert_eq!(" Light ".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
    let err = "blue".parse::<Theme>().unwrap_err();
    assert_eq!(err.to_string(), "unknown theme 'blue'");
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
}
