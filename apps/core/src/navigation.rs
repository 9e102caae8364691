use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::UiConfig;

/// Characters escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL of the map-detail view for a restaurant slug, e.g.
/// `map-view?restaurant=spicy-rigatoni`.
pub fn map_view_url(config: &UiConfig, id: &str) -> String {
    format!(
        "{}?{}={}",
        config.map_view_path,
        utf8_percent_encode(&config.query_param, URI_COMPONENT),
        utf8_percent_encode(id, URI_COMPONENT)
    )
}

/// Reads the restaurant slug from a query string (with or without the
/// leading `?`). Decoding follows `URLSearchParams`: `+` is a space and the
/// first occurrence wins. An empty value counts as missing.
pub fn restaurant_id_from_query(config: &UiConfig, query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == config.query_param.as_str())
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_view_url_encodes_like_uri_component() {
        let config = UiConfig::default();

        assert_eq!(
            map_view_url(&config, "spicy-rigatoni"),
            "map-view?restaurant=spicy-rigatoni"
        );
        assert_eq!(
            map_view_url(&config, "mac & cheese/2"),
            "map-view?restaurant=mac%20%26%20cheese%2F2"
        );
    }

    #[test]
    fn query_round_trips_an_encoded_slug() {
        let config = UiConfig::default();
        let url = map_view_url(&config, "café (north)");
        let query = url.split_once('?').map(|(_, query)| query).unwrap_or_default();

        assert_eq!(
            restaurant_id_from_query(&config, query).as_deref(),
            Some("café (north)")
        );
    }

    #[test]
    fn query_parsing_handles_missing_and_extra_params() {
        let config = UiConfig::default();

        assert_eq!(
            restaurant_id_from_query(&config, "?lang=en&restaurant=spicy-tuna-roll&restaurant=x")
                .as_deref(),
            Some("spicy-tuna-roll")
        );
        assert_eq!(restaurant_id_from_query(&config, "?lang=en"), None);
        assert_eq!(restaurant_id_from_query(&config, "?restaurant="), None);
        assert_eq!(restaurant_id_from_query(&config, ""), None);
    }
}
