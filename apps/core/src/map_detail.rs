use tracing::{debug, error};

use crate::catalog::{Catalog, RestaurantRecord};
use crate::config::UiConfig;
use crate::error::{Error, Result};
use crate::navigation::restaurant_id_from_query;
use crate::ports::{InfoCardView, InfoFields, MapOptions, MapProvider, Navigator};

pub const MAP_CONTAINER_ID: &str = "map-container";

/// A restaurant that made it onto the map-detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDetail {
    pub record: RestaurantRecord,
    pub map_options: MapOptions,
}

impl MapDetail {
    pub fn menu_url(&self) -> Option<&str> {
        self.record
            .menu_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// Opens the menu in a new browsing context. Returns `false` when the
    /// restaurant has no menu.
    pub fn open_menu(&self, navigator: &mut impl Navigator) -> bool {
        let Some(url) = self.menu_url() else {
            return false;
        };
        navigator.open_in_new_context(url);
        true
    }
}

pub struct MapDetailController<'a> {
    catalog: &'a Catalog,
    config: &'a UiConfig,
}

impl<'a> MapDetailController<'a> {
    pub const fn new(catalog: &'a Catalog, config: &'a UiConfig) -> Self {
        Self { catalog, config }
    }

    /// Finds the restaurant named by the page's query string.
    pub fn resolve(&self, query: &str) -> Result<&'a RestaurantRecord> {
        let id = restaurant_id_from_query(self.config, query).ok_or(Error::MissingRestaurantId)?;
        debug!(slug = %id, "restaurant slug read from query");
        self.catalog.lookup(&id)
    }

    /// Fills the info card and draws the map. Nothing is rendered when the
    /// restaurant can't be resolved; the failure is logged and returned.
    pub fn show<I, M>(&self, query: &str, info: &mut I, maps: &mut M) -> Result<MapDetail>
    where
        I: InfoCardView,
        M: MapProvider,
    {
        self.try_show(query, info, maps)
            .inspect_err(|err| error!("{err}"))
    }

    fn try_show<I, M>(&self, query: &str, info: &mut I, maps: &mut M) -> Result<MapDetail>
    where
        I: InfoCardView,
        M: MapProvider,
    {
        let record = self.resolve(query)?;
        info.update_info_fields(&InfoFields::from(record))?;

        let map_options = MapOptions {
            center: record.position(),
            zoom: self.config.map_zoom,
        };
        let map = maps.create_map(MAP_CONTAINER_ID, &map_options)?;
        maps.create_marker(&map, record.position())?;

        Ok(MapDetail {
            record: record.clone(),
            map_options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LatLng;
    use crate::testing::{FakeMap, RecordingInfoCard, RecordingMapProvider, RecordingNavigator};

    fn show(
        catalog: &Catalog,
        query: &str,
    ) -> (Result<MapDetail>, RecordingInfoCard, RecordingMapProvider) {
        let config = UiConfig::default();
        let mut info = RecordingInfoCard::default();
        let mut maps = RecordingMapProvider::default();
        let result = MapDetailController::new(catalog, &config).show(query, &mut info, &mut maps);
        (result, info, maps)
    }

    #[test]
    fn spicy_rigatoni_fills_the_card_and_centers_the_map() {
        let catalog = Catalog::builtin();
        let (result, info, maps) = show(&catalog, "?restaurant=spicy-rigatoni");

        let detail = result.expect("known restaurant");
        let fields = &info.writes[0];
        assert_eq!(fields.title, "Spicy Sausage Rigatoni");
        assert_eq!(fields.image_alt, "Spicy Sausage Rigatoni");
        assert_eq!(fields.stars, "★★★☆☆");
        assert_eq!(fields.status, "Open · Closes 9:30 pm");
        assert_eq!(fields.eta, "10 min by car");

        let center = LatLng {
            lat: 40.7128,
            lng: -74.0060,
        };
        assert_eq!(
            maps.maps,
            vec![(
                MAP_CONTAINER_ID.to_string(),
                MapOptions { center, zoom: 14 }
            )]
        );
        assert_eq!(maps.markers, vec![(FakeMap(0), center)]);
        assert_eq!(detail.map_options.zoom, 14);
    }

    #[test]
    fn unknown_restaurant_renders_nothing() {
        let catalog = Catalog::builtin();
        let (result, info, maps) = show(&catalog, "?restaurant=sushi-palace");

        assert!(matches!(result, Err(Error::UnknownRestaurant { .. })));
        assert!(info.writes.is_empty());
        assert!(maps.maps.is_empty());
        assert!(maps.markers.is_empty());
    }

    #[test]
    fn missing_query_parameter_renders_nothing() {
        let catalog = Catalog::builtin();
        let (result, info, maps) = show(&catalog, "");

        assert!(matches!(result, Err(Error::MissingRestaurantId)));
        assert!(info.writes.is_empty());
        assert!(maps.maps.is_empty());
    }

    #[test]
    fn repeated_lookups_render_identical_fields() {
        let catalog = Catalog::builtin();
        let (_, first, _) = show(&catalog, "?restaurant=spicy-tuna-roll");
        let (_, second, _) = show(&catalog, "?restaurant=spicy-tuna-roll");

        assert_eq!(first.writes, second.writes);
    }

    #[test]
    fn provider_failure_is_reported() {
        let catalog = Catalog::builtin();
        let config = UiConfig::default();
        let mut info = RecordingInfoCard::default();
        let mut maps = RecordingMapProvider {
            unavailable: true,
            ..RecordingMapProvider::default()
        };

        let result = MapDetailController::new(&catalog, &config).show(
            "restaurant=spicy-rigatoni",
            &mut info,
            &mut maps,
        );

        assert!(matches!(result, Err(Error::Dom(_))));
        assert!(maps.markers.is_empty());
    }

    #[test]
    fn info_card_failure_stops_before_the_map() {
        let catalog = Catalog::builtin();
        let config = UiConfig::default();
        let mut info = RecordingInfoCard {
            missing_element: Some("rest-stars"),
            ..RecordingInfoCard::default()
        };
        let mut maps = RecordingMapProvider::default();

        let result = MapDetailController::new(&catalog, &config).show(
            "?restaurant=spicy-rigatoni",
            &mut info,
            &mut maps,
        );

        assert!(matches!(result, Err(Error::MissingElement(ref id)) if id == "#rest-stars"));
        assert!(info.writes.is_empty());
        assert!(maps.maps.is_empty());
        assert!(maps.markers.is_empty());
    }

    #[test]
    fn menu_opens_only_when_present() {
        let catalog = Catalog::builtin();
        let (result, _, _) = show(&catalog, "?restaurant=chicken-tikka-masala");
        let mut detail = result.expect("known restaurant");
        let mut navigator = RecordingNavigator::default();

        assert!(detail.open_menu(&mut navigator));
        assert_eq!(navigator.opened, vec!["https://example.com/tikka-menu".to_string()]);

        detail.record.menu_url = None;
        assert!(!detail.open_menu(&mut navigator));
        assert_eq!(navigator.opened.len(), 1);
        assert!(navigator.visited.is_empty());
    }
}
