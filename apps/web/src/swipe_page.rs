use std::cell::RefCell;
use std::rc::Rc;

use dish_swipe::ports::SwipeView;
use dish_swipe::swipe::ExitAnimation;
use dish_swipe::{
    Deck, DishEntry, Result, SwipeController, SwipeDirection, SwipeOutcome, TouchTracker,
    UiConfig,
};
use tracing::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, TouchEvent, Window};

use crate::dom::{self, js_error, WindowNavigator};

pub const CONTAINER_SELECTOR: &str = ".swipe-container";
const CARD_SELECTOR: &str = ".swipe-card";

type Controller = SwipeController<DomSwipeView, WindowNavigator>;

/// The `.swipe-container` element and the cards rendered into it.
pub struct DomSwipeView {
    window: Window,
    document: Document,
    container: Element,
}

impl DomSwipeView {
    fn current_card(&self) -> Option<HtmlElement> {
        self.container
            .query_selector(CARD_SELECTOR)
            .ok()
            .flatten()
            .and_then(|card| card.dyn_into::<HtmlElement>().ok())
    }

    fn build_card(&self, dish: &DishEntry) -> Result<Element> {
        let card = self.document.create_element("div").map_err(js_error)?;
        card.set_class_name("swipe-card");
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            card.style()
                .set_property("background-image", &format!("url({})", dish.image_url))
                .map_err(js_error)?;
        }

        let title = self.document.create_element("div").map_err(js_error)?;
        title.set_class_name("swipe-title");
        title.set_text_content(Some(&dish.title));
        card.append_child(&title).map_err(js_error)?;

        Ok(card)
    }
}

impl SwipeView for DomSwipeView {
    fn clear_cards(&mut self) {
        self.container.set_inner_html("");
    }

    fn display_card(&mut self, dish: &DishEntry) -> Result<()> {
        let card = self.build_card(dish)?;
        self.container.append_child(&card).map_err(js_error)?;
        Ok(())
    }

    fn has_card(&self) -> bool {
        self.current_card().is_some()
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default()
    }

    fn animate_exit(&mut self, exit: &ExitAnimation) {
        let Some(card) = self.current_card() else {
            return;
        };
        let style = card.style();
        let result = style
            .set_property("transform", &exit.css_transform())
            .and_then(|()| style.set_property("opacity", &exit.opacity.to_string()));
        if let Err(err) = result {
            error!("Failed to animate card: {}", js_error(err));
        }
    }
}

/// Mounts the swipe deck. Fails without rendering anything when the
/// container or either button is missing.
pub fn mount(config: &UiConfig) -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    let container = document
        .query_selector(CONTAINER_SELECTOR)
        .map_err(js_error)?
        .ok_or_else(|| dish_swipe::Error::MissingElement(CONTAINER_SELECTOR.to_string()))?;
    let like = dom::element_by_id(&document, "like-btn")?;
    let dislike = dom::element_by_id(&document, "dislike-btn")?;

    let view = DomSwipeView {
        window,
        document,
        container: container.clone(),
    };
    let controller = Rc::new(RefCell::new(SwipeController::new(
        Deck::builtin(),
        config.clone(),
        view,
        WindowNavigator::new()?,
    )));

    dom::on(&like, "click", {
        let controller = controller.clone();
        move |_| trigger(&controller, SwipeDirection::Right)
    })?;
    dom::on(&dislike, "click", {
        let controller = controller.clone();
        move |_| trigger(&controller, SwipeDirection::Left)
    })?;

    let touch = Rc::new(RefCell::new(TouchTracker::default()));
    dom::on(&container, "touchstart", {
        let touch = touch.clone();
        move |event| {
            if let Some(x) = touch_x(&event, false) {
                touch.borrow_mut().begin(x);
            }
        }
    })?;
    dom::on(&container, "touchend", {
        let controller = controller.clone();
        let threshold = config.swipe_threshold_px;
        move |event| {
            let direction = touch_x(&event, true).and_then(|x| touch.borrow().end(x, threshold));
            if let Some(direction) = direction {
                trigger(&controller, direction);
            }
        }
    })?;

    controller.borrow_mut().mount()?;
    Ok(())
}

fn touch_x(event: &web_sys::Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.item(0).map(|touch| f64::from(touch.client_x()))
}

fn trigger(controller: &Rc<RefCell<Controller>>, direction: SwipeDirection) {
    let outcome = controller.borrow_mut().swipe(direction);
    match outcome {
        Ok(SwipeOutcome::Started { delay_ms, .. }) => schedule_settle(controller.clone(), delay_ms),
        Ok(SwipeOutcome::NoCard | SwipeOutcome::Ignored) => {}
        Err(err) => error!("Swipe failed: {err}"),
    }
}

// Next card once the exit animation has played
fn schedule_settle(controller: Rc<RefCell<Controller>>, delay_ms: u32) {
    let Ok(window) = dom::window() else {
        return;
    };

    let callback = Closure::once_into_js(move || {
        if let Err(err) = controller.borrow_mut().settle() {
            error!("Failed to show the next card: {err}");
        }
    });
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);

    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        error!("Failed to schedule the next card: {}", js_error(err));
    }
}
