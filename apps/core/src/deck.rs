use serde::{Deserialize, Serialize};

/// One card of the swipe deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishEntry {
    pub title: String,
    pub image_url: String,
}

impl DishEntry {
    pub fn new(title: &str, image_url: &str) -> Self {
        Self {
            title: title.to_string(),
            image_url: image_url.to_string(),
        }
    }
}

/// Ordered dishes presented one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    dishes: Vec<DishEntry>,
}

impl Deck {
    pub const fn new(dishes: Vec<DishEntry>) -> Self {
        Self { dishes }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            DishEntry::new(
                "Chicken Tikka Masala",
                "/assets/images/chicken_tikka_masala.jpg",
            ),
            DishEntry::new(
                "Spicy Sausage Rigatoni",
                "/assets/images/spicy-chicken-rigatoni.png",
            ),
            DishEntry::new("Spicy Tuna Roll", "/assets/images/spicytunaroll.jpg"),
            DishEntry::new("Pizza", "/assets/images/pizza.png"),
            DishEntry::new("Tacos", "/assets/images/tacos.png"),
            DishEntry::new("Pancakes", "/assets/images/pancakes.png"),
        ])
    }

    pub fn get(&self, index: usize) -> Option<&DishEntry> {
        self.dishes.get(index)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DishEntry> {
        self.dishes.iter()
    }
}
