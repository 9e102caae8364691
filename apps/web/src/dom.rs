use dish_swipe::ports::Navigator;
use dish_swipe::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn js_error(value: JsValue) -> Error {
    Error::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom("no window".to_string()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::Dom("no document".to_string()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(format!("#{id}")))
}

pub fn query(root: &Element, selector: &str) -> Result<Element> {
    root.query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}

pub fn exists(document: &Document, selector: &str) -> bool {
    matches!(document.query_selector(selector), Ok(Some(_)))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attaches `handler` for the page's lifetime.
pub fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Navigation through `window.location` and `window.open`.
pub struct WindowNavigator {
    window: Window,
}

impl WindowNavigator {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&mut self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            tracing::error!("Failed to navigate to {url}: {}", js_error(err));
        }
    }

    fn open_in_new_context(&mut self, url: &str) {
        if let Err(err) = self.window.open_with_url_and_target(url, "_blank") {
            tracing::error!("Failed to open {url}: {}", js_error(err));
        }
    }
}
