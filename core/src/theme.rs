use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn presentation(self) -> Presentation {
        match self {
            Theme::Dark => Presentation {
                class_name: "dark",
                background: "#050510",
                foreground: "#f8fafc",
                canvas_background: "linear-gradient(180deg, #050510 0%, #0f0f1a 50%, #050510 100%)",
            },
            Theme::Light => Presentation {
                class_name: "light",
                background: "#f8fafc",
                foreground: "#0f172a",
                canvas_background: "linear-gradient(180deg, #f8fafc 0%, #e2e8f0 50%, #f8fafc 100%)",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else if trimmed.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else {
            Err(ThemeParseError(trimmed.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeParseError(pub String);

impl fmt::Display for ThemeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}'", self.0)
    }
}

impl std::error::Error for ThemeParseError {}

/// Page-level colors applied alongside the theme class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub class_name: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub canvas_background: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "preference storage unavailable"),
            StoreError::Rejected(reason) => write!(f, "preference storage rejected write: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Operating-system color scheme hint. `None` when the platform cannot tell.
pub trait SchemeHint {
    fn preferred(&self) -> Option<Theme>;
}

pub trait PresentationSink {
    fn apply_presentation(&self, theme: Theme, presentation: &Presentation);
}

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

impl<T: PresentationSink + ?Sized> PresentationSink for Rc<T> {
    fn apply_presentation(&self, theme: Theme, presentation: &Presentation) {
        (**self).apply_presentation(theme, presentation)
    }
}

impl SchemeHint for Option<Theme> {
    fn preferred(&self) -> Option<Theme> {
        *self
    }
}

pub type ThemeSubscriber = Rc<dyn Fn(Theme)>;

/// Single source of truth for the page theme.
///
/// Nothing is applied to the sink until [`ThemeController::initialize`] runs,
/// so the page never flashes the wrong theme. After initialization every
/// toggle persists the new value, re-applies presentation and notifies
/// subscribers, in that order. A store that fails keeps the controller
/// working in memory for the rest of the session.
pub struct ThemeController {
    theme: Cell<Theme>,
    ready: Cell<bool>,
    store: Box<dyn PreferenceStore>,
    hint: Box<dyn SchemeHint>,
    sink: Box<dyn PresentationSink>,
    subscribers: Rc<RefCell<Vec<ThemeSubscriber>>>,
}

impl ThemeController {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        hint: Box<dyn SchemeHint>,
        sink: Box<dyn PresentationSink>,
    ) -> Self {
        Self {
            theme: Cell::new(Theme::default()),
            ready: Cell::new(false),
            store,
            hint,
            sink,
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn initialize(&self) -> Theme {
        if self.ready.get() {
            return self.theme.get();
        }
        let theme = self.resolve_initial();
        self.theme.set(theme);
        self.ready.set(true);
        self.apply(theme);
        self.notify();
        theme
    }

    /// Persisted value first, then the OS hint, then dark.
    pub fn resolve_initial(&self) -> Theme {
        let persisted = self
            .store
            .load(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse::<Theme>().ok());
        persisted
            .or_else(|| self.hint.preferred())
            .unwrap_or_default()
    }

    pub fn toggle(&self) -> Theme {
        if !self.ready.get() {
            self.initialize();
        }
        let next = self.theme.get().toggled();
        self.theme.set(next);
        let _ = self.store.save(THEME_STORAGE_KEY, next.as_str());
        self.apply(next);
        self.notify();
        next
    }

    pub fn apply(&self, theme: Theme) {
        self.sink.apply_presentation(theme, &theme.presentation());
    }

    pub fn subscribe(&self, subscriber: ThemeSubscriber) -> ThemeSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        ThemeSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        let theme = self.theme.get();
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber(theme);
        }
    }
}

pub struct ThemeSubscription {
    subscriber: ThemeSubscriber,
    subscribers: Rc<RefCell<Vec<ThemeSubscriber>>>,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
