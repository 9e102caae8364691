use std::rc::Rc;

use dish_swipe::ports::{InfoCardView, InfoFields};
use dish_swipe::{Catalog, MapDetailController, Result, UiConfig, MAP_CONTAINER_ID};
use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::dom::{self, js_error, WindowNavigator};
use crate::maps::{self, GoogleMaps};

pub const CONTAINER_SELECTOR: &str = "#map-container";
const READY_CALLBACK: &str = "initMap";

/// Writes the info card fields by element id.
struct DomInfoCard<'a> {
    document: &'a Document,
}

impl InfoCardView for DomInfoCard<'_> {
    // Every element is looked up before the first write, so a missing one
    // leaves the card untouched.
    fn update_info_fields(&mut self, fields: &InfoFields) -> Result<()> {
        let image = dom::element_by_id(self.document, "rest-img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| dish_swipe::Error::Dom("#rest-img is not an <img>".to_string()))?;
        let texts = [
            ("rest-title", &fields.title),
            ("rest-stars", &fields.stars),
            ("rest-status", &fields.status),
            ("rest-eta", &fields.eta),
        ]
        .into_iter()
        .map(|(id, text)| Ok((dom::element_by_id(self.document, id)?, text)))
        .collect::<Result<Vec<_>>>()?;

        image.set_src(&fields.image_url);
        image.set_alt(&fields.image_alt);
        for (element, text) in texts {
            element.set_text_content(Some(text.as_str()));
        }
        Ok(())
    }
}

/// Publishes the `initMap` global the maps script calls once it's ready.
/// If the script won the race and is already loaded, renders right away.
pub fn register(config: Rc<UiConfig>) -> Result<()> {
    let window = dom::window()?;

    let callback = Closure::<dyn FnMut()>::new({
        let config = config.clone();
        move || run(&config)
    });
    js_sys::Reflect::set(
        &window,
        &JsValue::from_str(READY_CALLBACK),
        callback.as_ref(),
    )
    .map_err(js_error)?;
    callback.forget();

    if maps::is_loaded(&window) {
        debug!("maps already loaded");
        run(&config);
    }
    Ok(())
}

fn run(config: &UiConfig) {
    if let Err(err) = init_map(config) {
        error!("Map view failed: {err}");
    }
}

fn init_map(config: &UiConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let search = window.location().search().map_err(js_error)?;
    let catalog = Catalog::builtin();

    let mut info = DomInfoCard {
        document: &document,
    };
    let mut maps = GoogleMaps::new(document.clone());

    // Lookup failures are already logged by the controller.
    let Ok(detail) = MapDetailController::new(&catalog, config).show(&search, &mut info, &mut maps)
    else {
        return Ok(());
    };
    debug!(id = %detail.record.id, container = MAP_CONTAINER_ID, "map rendered");

    let menu = dom::element_by_id(&document, "menu-btn")?;
    let mut navigator = WindowNavigator::new()?;
    dom::on(&menu, "click", move |_| {
        detail.open_menu(&mut navigator);
    })
}
