use std::rc::Rc;

use folio_core::{
    MemoryStore, PreferenceStore, Presentation, PresentationSink, SchemeHint, StoreError, Theme,
    ThemeController,
};
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage` with an in-memory shadow so a blocked storage still
/// remembers the choice for the current session.
pub(crate) struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
    session: MemoryStore,
}

impl LocalStorageStore {
    pub(crate) fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::log!("theme: storage unavailable, using session value");
        }
        Self::with_storage(storage)
    }

    pub(crate) fn with_storage(storage: Option<web_sys::Storage>) -> Self {
        Self {
            storage,
            session: MemoryStore::new(),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let Some(storage) = &self.storage else {
            return self.session.load(key);
        };
        match storage.get_item(key) {
            Ok(value) => Ok(value),
            Err(err) => {
                gloo::console::warn!("theme: storage read failed", err);
                self.session.load(key)
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.session.save(key, value)?;
        let Some(storage) = &self.storage else {
            gloo::console::warn!("theme: storage unavailable, keeping choice for this session", value.to_string());
            return Err(StoreError::Unavailable);
        };
        storage.set_item(key, value).map_err(|err| {
            gloo::console::warn!("theme: storage write failed", err.clone());
            StoreError::Rejected(err.as_string().unwrap_or_else(|| "set_item failed".to_string()))
        })
    }
}

pub(crate) struct MediaQueryHint;

impl SchemeHint for MediaQueryHint {
    fn preferred(&self) -> Option<Theme> {
        let prefers_dark = prefers_dark_mode()?;
        Some(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

fn prefers_dark_mode() -> Option<bool> {
    let window = web_sys::window()?;
    let match_media = Reflect::get(&window, &"matchMedia".into()).ok()?;
    let match_media = match_media.dyn_into::<Function>().ok()?;
    let query = match_media
        .call1(&window, &DARK_SCHEME_QUERY.into())
        .ok()?;
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
}

pub(crate) struct DocumentSink;

impl PresentationSink for DocumentSink {
    fn apply_presentation(&self, theme: Theme, presentation: &Presentation) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            let classes = root.class_list();
            let _ = classes.remove_2(Theme::Dark.as_str(), Theme::Light.as_str());
            let _ = classes.add_1(presentation.class_name);
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        if let Some(body) = document.body() {
            let style = body.style();
            let _ = style.set_property("background-color", presentation.background);
            let _ = style.set_property("color", presentation.foreground);
        }
    }
}

pub(crate) fn browser_controller() -> ThemeController {
    ThemeController::new(
        Box::new(LocalStorageStore::new()),
        Box::new(MediaQueryHint),
        Box::new(DocumentSink),
    )
}

/// What consumers see of the theme: current value, readiness and the
/// controller to act on.
#[derive(Clone)]
pub(crate) struct ThemeContext {
    pub(crate) controller: Rc<ThemeController>,
    pub(crate) theme: Theme,
    pub(crate) ready: bool,
}

impl ThemeContext {
    pub(crate) fn toggle(&self) {
        self.controller.toggle();
    }
}

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
            && self.theme == other.theme
            && self.ready == other.ready
    }
}
