//! Rendering ports.
//!
//! Controllers never touch the DOM directly; they talk to these traits. The
//! web crate implements them over `web-sys`, tests implement them with
//! recording doubles.

use serde::Serialize;

use crate::catalog::{LatLng, RestaurantRecord};
use crate::deck::DishEntry;
use crate::error::Result;
use crate::swipe::ExitAnimation;

pub const ADDED_CLASS: &str = "added";

/// The card container of the swipe page.
pub trait SwipeView {
    fn clear_cards(&mut self);
    fn display_card(&mut self, dish: &DishEntry) -> Result<()>;
    fn has_card(&self) -> bool;
    fn viewport_width(&self) -> f64;
    fn animate_exit(&mut self, exit: &ExitAnimation);
}

pub trait Navigator {
    fn navigate(&mut self, url: &str);
    fn open_in_new_context(&mut self, url: &str);
}

/// Text and image fields of the map-detail info card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoFields {
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    pub stars: String,
    pub status: String,
    pub eta: String,
}

impl From<&RestaurantRecord> for InfoFields {
    fn from(record: &RestaurantRecord) -> Self {
        Self {
            image_url: record.image_url.clone(),
            image_alt: record.title.clone(),
            title: record.title.clone(),
            stars: record.star_rating.clone(),
            status: record.open_status.clone(),
            eta: record.travel_eta.clone(),
        }
    }
}

pub trait InfoCardView {
    fn update_info_fields(&mut self, fields: &InfoFields) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    NotAdded,
    Added,
}

impl ControlState {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::NotAdded => "＋",
            Self::Added => "✓",
        }
    }

    pub const fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// A contact card's "add" button.
pub trait ControlView {
    fn set_control_state(&mut self, state: ControlState);
}

/// Options passed to the provider's map constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
}

/// External mapping provider (Google Maps in the browser).
pub trait MapProvider {
    type Map;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<Self::Map>;
    fn create_marker(&mut self, map: &Self::Map, position: LatLng) -> Result<()>;
}
