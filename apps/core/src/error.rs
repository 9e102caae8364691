use thiserror::Error;

/// Errors raised by the dish swipe core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown restaurant id: {id}{}", suggestion_hint(.suggestion.as_deref()))]
    UnknownRestaurant {
        id: String,
        suggestion: Option<String>,
    },

    #[error("No restaurant id in the query string")]
    MissingRestaurantId,

    #[error("Required element not found: {0}")]
    MissingElement(String),

    #[error("Contact card has no name")]
    EmptyContactName,

    #[error("Invalid transition from {from} with event {event}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },

    #[error("Failed to parse catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

fn suggestion_hint(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |slug| format!(" (did you mean {slug}?)"))
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_restaurant_mentions_suggestion() {
        let error = Error::UnknownRestaurant {
            id: "spicy-rigatone".to_string(),
            suggestion: Some("spicy-rigatoni".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Unknown restaurant id: spicy-rigatone (did you mean spicy-rigatoni?)"
        );
    }

    #[test]
    fn unknown_restaurant_without_suggestion() {
        let error = Error::UnknownRestaurant {
            id: "sushi-palace".to_string(),
            suggestion: None,
        };
        assert_eq!(error.to_string(), "Unknown restaurant id: sushi-palace");
    }
}
