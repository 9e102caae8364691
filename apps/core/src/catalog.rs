use std::collections::BTreeMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point handed to the mapping provider as `{lat, lng}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Display and location metadata for one restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub star_rating: String,
    pub open_status: String,
    pub travel_eta: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub menu_url: Option<String>,
}

impl RestaurantRecord {
    pub const fn position(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Restaurants keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: BTreeMap<String, RestaurantRecord>,
}

impl Catalog {
    pub fn new(records: impl IntoIterator<Item = RestaurantRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// The restaurants shipped with the front-end.
    pub fn builtin() -> Self {
        Self::new([
            record(
                "chicken-tikka-masala",
                "../assets/images/chicken_tikka_masala.jpg",
                "Chicken Tikka Masala",
                "★★★★☆",
                "Open · Closes 10:00 pm",
                "15 min by car",
                (41.8781, -87.6298),
                "https://example.com/tikka-menu",
            ),
            record(
                "spicy-rigatoni",
                "../assets/images/spicy-chicken-rigatoni.png",
                "Spicy Sausage Rigatoni",
                "★★★☆☆",
                "Open · Closes 9:30 pm",
                "10 min by car",
                (40.7128, -74.0060),
                "https://example.com/rigatoni-menu",
            ),
            record(
                "spicy-tuna-roll",
                "../assets/images/spicytunaroll.jpg",
                "Spicy Tuna Roll",
                "★★★☆☆",
                "Open · Closes 11:00 pm",
                "20 min by car",
                (37.7749, -122.4194),
                "https://example.com/tuna-menu",
            ),
        ])
    }

    /// Parses a JSON array of restaurant records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<RestaurantRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn get(&self, id: &str) -> Option<&RestaurantRecord> {
        self.records.get(id)
    }

    /// Like [`Catalog::get`], but an unknown id becomes an error carrying the
    /// closest known slug.
    pub fn lookup(&self, id: &str) -> Result<&RestaurantRecord> {
        self.get(id).ok_or_else(|| Error::UnknownRestaurant {
            id: id.to_string(),
            suggestion: self.suggest(id).map(str::to_string),
        })
    }

    /// Best fuzzy match among the known slugs.
    pub fn suggest(&self, id: &str) -> Option<&str> {
        let pattern = id.trim();
        if pattern.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        self.records
            .keys()
            .filter_map(|slug| matcher.fuzzy_match(slug, pattern).map(|score| (score, slug)))
            .max_by_key(|(score, _)| *score)
            .map(|(_, slug)| slug.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &RestaurantRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record(
    id: &str,
    image_url: &str,
    title: &str,
    star_rating: &str,
    open_status: &str,
    travel_eta: &str,
    (latitude, longitude): (f64, f64),
    menu_url: &str,
) -> RestaurantRecord {
    RestaurantRecord {
        id: id.to_string(),
        image_url: image_url.to_string(),
        title: title.to_string(),
        star_rating: star_rating.to_string(),
        open_status: open_status.to_string(),
        travel_eta: travel_eta.to_string(),
        latitude,
        longitude,
        menu_url: Some(menu_url.to_string()),
    }
}
