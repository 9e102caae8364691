//! Google Maps bindings

use dish_swipe::ports::{MapOptions, MapProvider};
use dish_swipe::{Error, LatLng, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::dom::{element_by_id, js_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Map")]
    fn new(container: &Element, options: &JsValue) -> std::result::Result<GoogleMap, JsValue>;

    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    pub type GoogleMarker;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "maps"], js_class = "Marker")]
    fn new(options: &JsValue) -> std::result::Result<GoogleMarker, JsValue>;
}

/// True once the maps script has defined `google.maps`.
pub fn is_loaded(window: &Window) -> bool {
    js_sys::Reflect::get(window, &JsValue::from_str("google"))
        .and_then(|google| js_sys::Reflect::get(&google, &JsValue::from_str("maps")))
        .is_ok_and(|maps| !maps.is_undefined())
}

pub struct GoogleMaps {
    document: Document,
}

impl GoogleMaps {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl MapProvider for GoogleMaps {
    type Map = GoogleMap;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<GoogleMap> {
        let container = element_by_id(&self.document, container_id)?;
        let options = to_js(options)?;
        GoogleMap::new(&container, &options).map_err(js_error)
    }

    fn create_marker(&mut self, map: &GoogleMap, position: LatLng) -> Result<()> {
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("position"), &to_js(&position)?)
            .map_err(js_error)?;
        js_sys::Reflect::set(&options, &JsValue::from_str("map"), map.as_ref())
            .map_err(js_error)?;

        GoogleMarker::new(&options).map_err(js_error)?;
        Ok(())
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| Error::Dom(err.to_string()))
}
