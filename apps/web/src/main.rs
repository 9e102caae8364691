mod dom;
mod group_page;
mod logging;
mod map_page;
mod maps;
mod recs_page;
mod swipe_page;

use std::rc::Rc;

use dish_swipe::UiConfig;
use tracing::{debug, error, warn, Level};
use wasm_bindgen::JsValue;
use web_sys::Window;

const CONFIG_GLOBAL: &str = "DISH_SWIPE_CONFIG";

fn main() {
    logging::install_panic_hook();
    logging::init(Level::DEBUG);

    let Ok(window) = dom::window() else {
        return;
    };
    let Ok(document) = dom::document() else {
        return;
    };
    let config = Rc::new(load_config(&window));

    // Each page mounts only the controllers it has markup for; one failing
    // doesn't stop the others.
    if dom::exists(&document, swipe_page::CONTAINER_SELECTOR) {
        debug!("mounting swipe deck");
        if let Err(err) = swipe_page::mount(&config) {
            error!("Swipe deck not mounted: {err}");
        }
    }

    if dom::exists(&document, group_page::CARD_SELECTOR) {
        debug!("mounting group sync");
        if let Err(err) = group_page::mount() {
            error!("Group sync not mounted: {err}");
        }
    }

    if dom::exists(&document, map_page::CONTAINER_SELECTOR) {
        debug!("waiting for the maps library");
        if let Err(err) = map_page::register(config.clone()) {
            error!("Map view not registered: {err}");
        }
    }

    if let Err(err) = recs_page::register(config) {
        error!("Recommendation links not wired: {err}");
    }
}

fn load_config(window: &Window) -> UiConfig {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return UiConfig::default();
    }

    serde_wasm_bindgen::from_value(value).unwrap_or_else(|err| {
        warn!("Ignoring invalid {CONFIG_GLOBAL}: {err}");
        UiConfig::default()
    })
}
