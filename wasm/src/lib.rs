mod console;

use explorer_common::{Effect, Explorer, ExplorerConfig, KeyCode, Shape};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    console::init(log::LevelFilter::Info);
}

#[wasm_bindgen]
pub fn set_verbose_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    console::init(level);
}

struct Inner {
    explorer: Explorer,
    on_effect: js_sys::Function,
}

/// The map explorer as seen from JavaScript. Every effect is handed to the
/// `on_effect` callback as a plain object tagged by `type`; scheduled tasks
/// are armed on `window.setTimeout` and never reach the callback.
#[wasm_bindgen]
pub struct MapExplorer {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl MapExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        on_effect: js_sys::Function,
    ) -> Result<MapExplorer, String> {
        let config = match config_json.as_deref() {
            Some(json) if !json.trim().is_empty() => ExplorerConfig::from_json(json)?,
            _ => ExplorerConfig::default(),
        };
        let explorer = Explorer::new(config)?;
        Ok(MapExplorer {
            inner: Rc::new(RefCell::new(Inner {
                explorer,
                on_effect,
            })),
        })
    }

    /// Shapes as an array of `{id, class, name, title, "data-name", bbox}`
    /// objects, in DOM order. Returns the number of countries found.
    pub fn load_shapes(&self, shapes: JsValue) -> Result<usize, String> {
        let shapes: Vec<Shape> =
            serde_wasm_bindgen::from_value(shapes).map_err(|e| e.to_string())?;
        let effects = self.inner.borrow_mut().explorer.load_shapes(shapes);
        self.dispatch(effects);
        Ok(self
            .inner
            .borrow()
            .explorer
            .catalog()
            .map_or(0, |catalog| catalog.len()))
    }

    /// Body of the content fetch. `false` when it could not be parsed; the
    /// explorer then runs without content.
    pub fn load_content(&self, json: &str) -> bool {
        self.inner.borrow_mut().explorer.load_content(json).is_ok()
    }

    pub fn content_unavailable(&self, reason: &str) {
        self.inner.borrow_mut().explorer.content_unavailable(reason);
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().explorer.is_ready()
    }

    pub fn select_by_name(&self, term: &str) -> bool {
        let result = self
            .inner
            .borrow_mut()
            .explorer
            .select_by_name(term, now_ms());
        self.settle(result)
    }

    pub fn select_by_identifier(&self, identifier: &str) -> bool {
        let result = self
            .inner
            .borrow_mut()
            .explorer
            .select_by_identifier(identifier, now_ms());
        self.settle(result)
    }

    pub fn click_shape(&self, index: usize) -> bool {
        let result = self.inner.borrow_mut().explorer.click_shape(index, now_ms());
        self.settle(result)
    }

    pub fn hover_shape(&self, index: usize, entering: bool) {
        let effects = self.inner.borrow_mut().explorer.hover_shape(index, entering);
        self.dispatch(effects);
    }

    pub fn search_input(&self, text: &str) {
        let effects = self.inner.borrow_mut().explorer.search_input(text);
        self.dispatch(effects);
    }

    /// DOM `keyCode` of a keydown in the search box. `true` when the key
    /// was handled and the default action should be prevented.
    pub fn key_down(&self, key_code: u32) -> bool {
        let Some(key) = KeyCode::from_dom(key_code) else {
            return false;
        };
        let result = self.inner.borrow_mut().explorer.key_down(key, now_ms());
        self.settle(result);
        true
    }

    pub fn hover_suggestion(&self, index: usize) {
        let effects = self.inner.borrow_mut().explorer.hover_suggestion(index);
        self.dispatch(effects);
    }

    pub fn choose_suggestion(&self, index: usize) -> bool {
        let result = self
            .inner
            .borrow_mut()
            .explorer
            .choose_suggestion(index, now_ms());
        self.settle(result)
    }

    pub fn activate_media(&self, index: usize) {
        let effects = self.inner.borrow_mut().explorer.activate_media(index);
        self.dispatch(effects);
    }

    pub fn zoom_in(&self) {
        let effects = self.inner.borrow_mut().explorer.zoom_in();
        self.dispatch(effects);
    }

    pub fn zoom_out(&self) {
        let effects = self.inner.borrow_mut().explorer.zoom_out();
        self.dispatch(effects);
    }

    pub fn reset_zoom(&self) {
        let effects = self.inner.borrow_mut().explorer.reset_zoom();
        self.dispatch(effects);
    }

    /// Current transform in SVG `transform` attribute syntax.
    pub fn svg_transform(&self) -> String {
        self.inner.borrow().explorer.transform().to_svg_transform()
    }

    /// Country catalog as an array of `{name, identifier, normalizedName}`.
    pub fn catalog(&self) -> Result<JsValue, String> {
        let inner = self.inner.borrow();
        let records = inner
            .explorer
            .catalog()
            .map(|catalog| catalog.records())
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(records).map_err(|e| e.to_string())
    }
}

impl MapExplorer {
    fn settle(&self, result: Result<Vec<Effect>, explorer_common::ExplorerError>) -> bool {
        match result {
            Ok(effects) => {
                self.dispatch(effects);
                true
            }
            Err(err) => {
                log::debug!("{}", err);
                false
            }
        }
    }

    fn dispatch(&self, effects: Vec<Effect>) {
        dispatch(&self.inner, effects);
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Delay for `setTimeout`, which takes an `i32`.
fn timeout_ms(delay_ms: u64) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Hand effects to JavaScript. The `RefCell` is not borrowed while the
/// callback runs, so the page may call back into the explorer from it.
fn dispatch(inner: &Rc<RefCell<Inner>>, effects: Vec<Effect>) {
    if effects.is_empty() {
        return;
    }
    let on_effect = inner.borrow().on_effect.clone();
    for effect in effects {
        if let Effect::Schedule { task } = &effect {
            arm_timer(Rc::downgrade(inner), task.ticket, task.delay_ms);
            continue;
        }
        let value = match serde_wasm_bindgen::to_value(&effect) {
            Ok(value) => value,
            Err(err) => {
                log::error!("Failed to convert effect {:?}: {}", effect, err);
                continue;
            }
        };
        if let Err(err) = on_effect.call1(&JsValue::NULL, &value) {
            log::error!("Effect callback failed: {:?}", err);
        }
    }
}

fn arm_timer(inner: Weak<RefCell<Inner>>, ticket: u64, delay_ms: u64) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window, dropping task {}", ticket);
        return;
    };
    let callback = Closure::once_into_js(move || {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let effects = inner.borrow_mut().explorer.run_task(ticket);
        dispatch(&inner, effects);
    });
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_ms(delay_ms),
    ) {
        log::error!("Failed to arm timer for task {}: {:?}", ticket, err);
    }
}
