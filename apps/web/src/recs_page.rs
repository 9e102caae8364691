use std::rc::Rc;

use dish_swipe::navigation::map_view_url;
use dish_swipe::ports::Navigator;
use dish_swipe::{Error, Result, UiConfig};
use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{self, js_error, WindowNavigator};

const CARD_SELECTOR: &str = ".rec-card";
const GO_SELECTOR: &str = ".rec-card .go-btn";
const GLOBAL_NAME: &str = "goToMap";

/// Sends the browser to the map view of the card containing `element`.
fn go_to_map(config: &UiConfig, element: &Element) -> Result<()> {
    let card = element
        .closest(CARD_SELECTOR)
        .map_err(js_error)?
        .ok_or_else(|| Error::MissingElement(CARD_SELECTOR.to_string()))?;
    let id = card
        .get_attribute("data-id")
        .ok_or_else(|| Error::MissingElement(format!("{CARD_SELECTOR}[data-id]")))?;

    WindowNavigator::new()?.navigate(&map_view_url(config, &id));
    Ok(())
}

/// Exposes `goToMap(button)` for inline handlers and wires the arrow buttons
/// already on the page.
pub fn register(config: Rc<UiConfig>) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let global = Closure::<dyn FnMut(JsValue)>::new({
        let config = config.clone();
        move |target: JsValue| match target.dyn_into::<Element>() {
            Ok(element) => {
                if let Err(err) = go_to_map(&config, &element) {
                    error!("goToMap failed: {err}");
                }
            }
            Err(_) => error!("goToMap expects an element"),
        }
    });
    js_sys::Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), global.as_ref())
        .map_err(js_error)?;
    global.forget();

    for button in dom::query_all(&document, GO_SELECTOR)? {
        let config = config.clone();
        let target = button.clone();
        dom::on(&target, "click", move |_| {
            if let Err(err) = go_to_map(&config, &button) {
                error!("Navigation to map failed: {err}");
            }
        })?;
    }

    Ok(())
}
