use std::cell::RefCell;
use std::rc::Rc;

use dish_swipe::ports::{ControlState, ControlView, ADDED_CLASS};
use dish_swipe::{Error, GroupToggleController, Result};
use tracing::error;
use web_sys::Element;

use crate::dom::{self, js_error};

pub const CARD_SELECTOR: &str = ".contact-card";
const BUTTON_SELECTOR: &str = ".contact-card .add-btn";
const NAME_SELECTOR: &str = ".contact-info h3";

/// A contact card's "add" button.
struct DomControl<'a> {
    button: &'a Element,
}

impl ControlView for DomControl<'_> {
    fn set_control_state(&mut self, state: ControlState) {
        self.button.set_text_content(Some(state.glyph()));

        let classes = self.button.class_list();
        let result = if state.is_added() {
            classes.add_1(ADDED_CLASS)
        } else {
            classes.remove_1(ADDED_CLASS)
        };
        if let Err(err) = result {
            error!("Failed to update button class: {}", js_error(err));
        }
    }
}

/// Wires every add button of the group-sync page to one shared membership set.
pub fn mount() -> Result<()> {
    let document = dom::document()?;
    let controller = Rc::new(RefCell::new(GroupToggleController::new()));

    for button in dom::query_all(&document, BUTTON_SELECTOR)? {
        let controller = controller.clone();
        let target = button.clone();
        dom::on(&target, "click", move |_| {
            if let Err(err) = toggle(&controller, &button) {
                error!("Group toggle failed: {err}");
            }
        })?;
    }

    Ok(())
}

fn toggle(controller: &Rc<RefCell<GroupToggleController>>, button: &Element) -> Result<()> {
    let card = button
        .closest(CARD_SELECTOR)
        .map_err(js_error)?
        .ok_or_else(|| Error::MissingElement(CARD_SELECTOR.to_string()))?;
    let name = dom::query(&card, NAME_SELECTOR)?
        .text_content()
        .unwrap_or_default();

    controller
        .borrow_mut()
        .toggle(&name, &mut DomControl { button })?;
    Ok(())
}
