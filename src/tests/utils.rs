use crate::app::{Controller, Intent, PageSurface, Region};
use crate::config::ViewOptions;
use crate::domain::Property;
use crate::host::HandleRegistry;
use crate::render::map::MarkerLayer;
use crate::render::metrics::DistributionChart;
use maud::Markup;
use scraper::Html;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

pub type TestController =
    Controller<HandleRegistry<MarkerLayer>, HandleRegistry<DistributionChart>, RecordingPage>;

/// A mappable property with two rooms and 100 m².
pub fn property(id: &str, property_type: &str, price: f64) -> Property {
    property_with(id, property_type, price, 2, 100.0)
}

pub fn property_with(id: &str, property_type: &str, price: f64, beds: u32, area: f64) -> Property {
    Property {
        id: id.to_string(),
        name: format!("Property {id}"),
        price,
        area,
        property_type: property_type.to_string(),
        beds,
        description: String::new(),
        image_url: format!("https://img.example.com/{id}.jpg"),
        location: vec![json!(31.2357), json!(30.0444)],
    }
}

/// `n` properties alternating between apartments and villas, rising in price.
pub fn many(n: usize) -> Vec<Property> {
    (0..n)
        .map(|i| {
            let kind = if i % 2 == 0 { "Apartment" } else { "Villa" };
            property(&format!("p{i}"), kind, 100_000.0 + i as f64 * 1_000.0)
        })
        .collect()
}

/// Page surface that remembers everything drawn on it.
#[derive(Debug, Default)]
pub struct RecordingPage {
    pub regions: BTreeMap<Region, String>,
    pub renders: Vec<Region>,
    pub modal_visible: bool,
    pub scrolls: Vec<u32>,
    pub deferred: Vec<(Duration, Intent)>,
}

impl RecordingPage {
    pub fn region(&self, region: Region) -> &str {
        self.regions.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn html(&self, region: Region) -> Html {
        Html::parse_fragment(self.region(region))
    }

    pub fn text(&self, region: Region) -> String {
        self.html(region).root_element().text().collect()
    }
}

impl PageSurface for RecordingPage {
    fn render(&mut self, region: Region, markup: Markup) {
        self.renders.push(region);
        self.regions.insert(region, markup.into_string());
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn scroll_to(&mut self, top: u32) {
        self.scrolls.push(top);
    }

    fn defer(&mut self, delay: Duration, intent: Intent) {
        self.deferred.push((delay, intent));
    }
}

pub fn controller_with(options: ViewOptions) -> TestController {
    let mut controller = Controller::new(
        HandleRegistry::new(),
        HandleRegistry::new(),
        RecordingPage::default(),
        options,
    );
    controller.start();
    controller
}

pub fn controller() -> TestController {
    controller_with(ViewOptions::default())
}

pub fn loaded_controller(properties: Vec<Property>) -> TestController {
    let mut controller = controller();
    controller.dispatch(Intent::SnapshotLoaded(Ok(properties)));
    controller
}

pub fn ids(properties: &[Property]) -> Vec<&str> {
    properties.iter().map(|p| p.id.as_str()).collect()
}
