// Export our modules for use in binaries and the web front-end
pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;
pub mod group;
pub mod map_detail;
pub mod navigation;
pub mod ports;
pub mod swipe;

#[cfg(test)]
mod testing;

pub use catalog::{Catalog, LatLng, RestaurantRecord};
pub use config::UiConfig;
pub use deck::{Deck, DishEntry};
pub use error::{Error, Result};
pub use group::{GroupMembership, GroupToggleController, ToggleOutcome};
pub use map_detail::{MapDetail, MapDetailController, MAP_CONTAINER_ID};
pub use swipe::{SwipeController, SwipeDirection, SwipeOutcome, SwipePhase, TouchTracker};
