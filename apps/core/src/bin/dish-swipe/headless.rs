use color_eyre::Result;
use dish_swipe::map_detail::MapDetailController;
use dish_swipe::navigation::map_view_url;
use dish_swipe::ports::{InfoCardView, InfoFields, MapOptions, MapProvider, Navigator, SwipeView};
use dish_swipe::swipe::{ExitAnimation, RenderOutcome};
use dish_swipe::{
    Catalog, Deck, DishEntry, LatLng, RestaurantRecord, SwipeController, SwipeDirection,
    SwipeOutcome, UiConfig,
};
use serde::Serialize;

// Width of the simulated phone screen
const VIEWPORT_WIDTH_PX: f64 = 390.0;

#[derive(Default)]
struct TerminalCard {
    card: Option<DishEntry>,
}

impl SwipeView for TerminalCard {
    fn clear_cards(&mut self) {
        self.card = None;
    }

    fn display_card(&mut self, dish: &DishEntry) -> dish_swipe::Result<()> {
        self.card = Some(dish.clone());
        Ok(())
    }

    fn has_card(&self) -> bool {
        self.card.is_some()
    }

    fn viewport_width(&self) -> f64 {
        VIEWPORT_WIDTH_PX
    }

    fn animate_exit(&mut self, exit: &ExitAnimation) {
        tracing::debug!(transform = %exit.css_transform(), "card leaving");
    }
}

#[derive(Default)]
struct TerminalNavigator {
    navigated_to: Option<String>,
}

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, url: &str) {
        self.navigated_to = Some(url.to_string());
    }

    fn open_in_new_context(&mut self, url: &str) {
        tracing::info!(%url, "would open in a new tab");
    }
}

#[derive(Default)]
struct CapturedInfo(Option<InfoFields>);

impl InfoCardView for CapturedInfo {
    fn update_info_fields(&mut self, fields: &InfoFields) -> dish_swipe::Result<()> {
        self.0 = Some(fields.clone());
        Ok(())
    }
}

/// Records what the page would ask the mapping provider to draw.
#[derive(Default)]
struct PlannedMap {
    marker: Option<LatLng>,
}

impl MapProvider for PlannedMap {
    type Map = MapOptions;

    fn create_map(
        &mut self,
        _container_id: &str,
        options: &MapOptions,
    ) -> dish_swipe::Result<MapOptions> {
        Ok(*options)
    }

    fn create_marker(&mut self, _map: &MapOptions, position: LatLng) -> dish_swipe::Result<()> {
        self.marker = Some(position);
        Ok(())
    }
}

pub fn render_deck(deck: &Deck, json: bool) -> Result<()> {
    if json {
        let dishes: Vec<&DishEntry> = deck.iter().collect();
        println!("{}", serde_json::to_string_pretty(&dishes)?);
        return Ok(());
    }

    println!("\nSwipe Deck");
    println!("==========");
    for (index, dish) in deck.iter().enumerate() {
        println!("{:>2}. {} | {}", index + 1, dish.title, dish.image_url);
    }
    Ok(())
}

pub fn render_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let records: Vec<&RestaurantRecord> = catalog.records().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("\nRestaurants");
    println!("===========");
    for record in catalog.records() {
        println!(
            "- {} | {} | {} | {} | ({}, {})",
            record.id,
            record.title,
            record.star_rating,
            record.travel_eta,
            record.latitude,
            record.longitude
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ShowReport {
    id: String,
    info: InfoFields,
    map: MapOptions,
    marker: Option<LatLng>,
    menu_url: Option<String>,
}

pub fn render_show(catalog: &Catalog, config: &UiConfig, slug: &str, json: bool) -> Result<()> {
    let url = map_view_url(config, slug);
    let query = url.split_once('?').map_or("", |(_, query)| query);

    let mut info = CapturedInfo::default();
    let mut maps = PlannedMap::default();
    let detail = MapDetailController::new(catalog, config).show(query, &mut info, &mut maps)?;

    let report = ShowReport {
        id: detail.record.id.clone(),
        info: info
            .0
            .unwrap_or_else(|| InfoFields::from(&detail.record)),
        map: detail.map_options,
        marker: maps.marker,
        menu_url: detail.menu_url().map(str::to_string),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", report.info.title);
    println!("{}", "=".repeat(report.info.title.chars().count()));
    println!("Stars:  {}", report.info.stars);
    println!("Status: {}", report.info.status);
    println!("ETA:    {}", report.info.eta);
    println!("Image:  {}", report.info.image_url);
    println!(
        "Map:    center ({}, {}) zoom {}",
        report.map.center.lat, report.map.center.lng, report.map.zoom
    );
    if let Some(marker) = report.marker {
        println!("Marker: ({}, {})", marker.lat, marker.lng);
    }
    println!(
        "Menu:   {}",
        report.menu_url.as_deref().unwrap_or("(none)")
    );
    Ok(())
}

pub fn render_url(catalog: &Catalog, config: &UiConfig, slug: &str) -> Result<()> {
    let record = catalog.lookup(slug)?;
    println!("{}", map_view_url(config, &record.id));
    Ok(())
}

#[derive(Serialize)]
struct SwipeStep {
    direction: String,
    transform: Option<String>,
    next: Option<String>,
}

#[derive(Serialize)]
struct SessionReport {
    first: Option<String>,
    steps: Vec<SwipeStep>,
    navigated_to: Option<String>,
}

pub fn render_swipe(
    deck: Deck,
    config: &UiConfig,
    moves: &[SwipeDirection],
    json: bool,
) -> Result<()> {
    let mut controller = SwipeController::new(
        deck,
        config.clone(),
        TerminalCard::default(),
        TerminalNavigator::default(),
    );
    controller.mount()?;
    let first = current_title(&controller);

    let mut steps = Vec::with_capacity(moves.len());
    for &direction in moves {
        let transform = match controller.swipe(direction)? {
            SwipeOutcome::Started { exit, .. } => {
                if controller.settle()? == RenderOutcome::Finished {
                    tracing::debug!("deck finished");
                }
                Some(exit.css_transform())
            }
            SwipeOutcome::NoCard | SwipeOutcome::Ignored => None,
        };
        steps.push(SwipeStep {
            direction: direction.to_string(),
            transform,
            next: current_title(&controller),
        });
    }

    let report = SessionReport {
        first,
        steps,
        navigated_to: controller.navigator().navigated_to.clone(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\nSwipe Session");
    println!("=============");
    println!("Start: {}", report.first.as_deref().unwrap_or("(empty deck)"));
    for step in &report.steps {
        match (&step.transform, &step.next) {
            (None, _) => println!("- {}: no card", step.direction),
            (Some(transform), Some(next)) => {
                println!("- {} [{transform}] -> {next}", step.direction);
            }
            (Some(transform), None) => println!("- {} [{transform}] -> end of deck", step.direction),
        }
    }
    if let Some(url) = &report.navigated_to {
        println!("Navigated to {url}");
    }
    Ok(())
}

fn current_title(controller: &SwipeController<TerminalCard, TerminalNavigator>) -> Option<String> {
    controller.view().card.as_ref().map(|dish| dish.title.clone())
}
