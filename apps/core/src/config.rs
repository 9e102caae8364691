#[cfg(feature = "cli")]
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::env;
#[cfg(any(feature = "cli", test))]
use std::str::FromStr;

pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_SWIPE_DELAY_MS: u32 = 300;
pub const DEFAULT_EXIT_ROTATION_DEG: f64 = 30.0;
pub const DEFAULT_MAP_ZOOM: u8 = 14;
pub const DEFAULT_RECOMMENDATIONS_URL: &str = "/pages/recommendations.html";
pub const DEFAULT_MAP_VIEW_PATH: &str = "map-view";
pub const DEFAULT_QUERY_PARAM: &str = "restaurant";

/// Tunables shared by the web pages and the headless CLI.
///
/// Every field has a default, so a partial JSON object (or none at all)
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Minimum horizontal touch travel before a gesture counts as a swipe
    pub swipe_threshold_px: f64,
    /// Delay between the exit animation and the next card
    pub swipe_delay_ms: u32,
    pub exit_rotation_deg: f64,
    pub map_zoom: u8,
    pub recommendations_url: String,
    pub map_view_path: String,
    pub query_param: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            swipe_delay_ms: DEFAULT_SWIPE_DELAY_MS,
            exit_rotation_deg: DEFAULT_EXIT_ROTATION_DEG,
            map_zoom: DEFAULT_MAP_ZOOM,
            recommendations_url: DEFAULT_RECOMMENDATIONS_URL.to_string(),
            map_view_path: DEFAULT_MAP_VIEW_PATH.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
        }
    }
}

impl UiConfig {
    /// Loads `.env` if present, then applies `DISH_SWIPE_*` overrides.
    /// Unparseable numbers fall back to the defaults.
    #[cfg(feature = "cli")]
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    #[cfg(any(feature = "cli", test))]
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            swipe_threshold_px: parse_finite_or(
                lookup("DISH_SWIPE_THRESHOLD_PX"),
                defaults.swipe_threshold_px,
            ),
            swipe_delay_ms: parse_or(lookup("DISH_SWIPE_DELAY_MS"), defaults.swipe_delay_ms),
            exit_rotation_deg: parse_finite_or(
                lookup("DISH_SWIPE_EXIT_ROTATION_DEG"),
                defaults.exit_rotation_deg,
            ),
            map_zoom: parse_or(lookup("DISH_SWIPE_MAP_ZOOM"), defaults.map_zoom),
            recommendations_url: lookup("DISH_SWIPE_RECOMMENDATIONS_URL")
                .unwrap_or(defaults.recommendations_url),
            map_view_path: lookup("DISH_SWIPE_MAP_VIEW_PATH").unwrap_or(defaults.map_view_path),
            query_param: lookup("DISH_SWIPE_QUERY_PARAM").unwrap_or(defaults.query_param),
        }
    }
}

#[cfg(any(feature = "cli", test))]
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

// NaN and infinities would make every distance comparison false.
#[cfg(any(feature = "cli", test))]
fn parse_finite_or(value: Option<String>, default: f64) -> f64 {
    Some(parse_or(value, default))
        .filter(|parsed| parsed.is_finite())
        .unwrap_or(default)
}
