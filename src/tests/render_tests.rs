// src/tests/render_tests.rs

use crate::app::{Controller, Intent, Region};
use crate::config::BrowserConfig;
use crate::domain::{CriteriaChange, SortMode};
use crate::host::{render_page, BrowserController, HandleRegistry, HtmlDocument};
use crate::templates::components::{modal_content, property_card};
use crate::tests::utils::{many, property_with};
use scraper::{Html, Selector};
use std::sync::mpsc;

fn select_text(html: &Html, css: &str) -> String {
    let selector = Selector::parse(css).unwrap();
    html.select(&selector).flat_map(|e| e.text()).collect()
}

fn select_attr(html: &Html, css: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(css).unwrap();
    html.select(&selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(str::to_string)
}

#[test]
fn card_shows_summary_price_and_detail_link() {
    let mut p = property_with("id 7", "Duplex", 1_500_000.0, 4, 210.0);
    p.name = "Garden <Duplex>".into();

    let html = Html::parse_fragment(&property_card(&p).into_string());

    assert_eq!(select_text(&html, ".card-title"), "Garden <Duplex>");
    assert_eq!(select_text(&html, ".card-meta"), "Duplex • 210 m² • 4 rooms");
    assert_eq!(select_text(&html, ".card-price"), "$1,500,000");
    assert_eq!(
        select_attr(&html, ".card-item", "data-property-id").as_deref(),
        Some("id 7")
    );
    assert_eq!(
        select_attr(&html, "a.btn", "href").as_deref(),
        Some("property.html?id=id+7")
    );
}

#[test]
fn modal_lists_every_detail() {
    let mut p = property_with("m1", "Villa", 2_000_000.0, 5, 450.0);
    p.description = "Pool and garden".into();

    let html = Html::parse_fragment(&modal_content(&p).into_string());
    let text = select_text(&html, "div");

    assert_eq!(select_text(&html, "h2"), "Property m1");
    for expected in ["$2,000,000", "450 m²", "Villa", "5", "Pool and garden", "Contact", "Full page"] {
        assert!(text.contains(expected), "modal missing {expected:?}");
    }
}

fn browser_controller() -> BrowserController {
    let (tx, _rx) = mpsc::channel();
    let mut controller = Controller::new(
        HandleRegistry::new(),
        HandleRegistry::new(),
        HtmlDocument::new(tx),
        BrowserConfig::default().view,
    );
    controller.start();
    controller
}

#[test]
fn exported_page_carries_regions_controls_and_data() {
    let config = BrowserConfig::default();
    let mut controller = browser_controller();
    controller.dispatch(Intent::SnapshotLoaded(Ok(many(11))));
    controller.dispatch(Intent::Criteria(CriteriaChange::Sort(SortMode::AreaDesc)));

    let page = Html::parse_document(&render_page(&controller, &config));

    assert_eq!(select_text(&page, "#resultsInfo"), "11 results");
    assert_eq!(
        page.select(&Selector::parse("#listings .card-item").unwrap()).count(),
        9
    );
    assert_eq!(select_text(&page, "#metricCount"), "11");
    assert_eq!(
        select_attr(&page, "#sortBy option[selected]", "value").as_deref(),
        Some("area_desc")
    );
    assert_eq!(
        page.select(&Selector::parse("#typeFilter option").unwrap()).count(),
        3
    );

    let markers = select_text(&page, "script#markerLayer");
    let layer: serde_json::Value = serde_json::from_str(&markers).unwrap();
    assert_eq!(layer["mode"], "clustered");
    assert_eq!(layer["markers"].as_array().map(Vec::len), Some(11));

    let chart: serde_json::Value =
        serde_json::from_str(&select_text(&page, "script#chartData")).unwrap();
    assert_eq!(chart["labels"], serde_json::json!(["Apartment", "Villa"]));
}

#[test]
fn every_region_has_one_container_in_the_exported_page() {
    let config = BrowserConfig::default();
    let mut controller = browser_controller();
    controller.dispatch(Intent::SnapshotLoaded(Ok(many(4))));
    let page = Html::parse_document(&render_page(&controller, &config));

    for region in [
        Region::Listings,
        Region::Pagination,
        Region::ResultsInfo,
        Region::MetricCount,
        Region::MetricAverage,
        Region::MetricTopType,
        Region::PriceLabel,
        Region::ModalContent,
    ] {
        let selector = Selector::parse(&format!("#{}", region.element_id())).unwrap();
        assert_eq!(page.select(&selector).count(), 1, "{region:?}");
    }
    assert_eq!(
        page.select(&Selector::parse("div.grid#listings .card-item").unwrap()).count(),
        4
    );
}

#[test]
fn exported_price_control_follows_a_drag() {
    let config = BrowserConfig::default();
    let mut controller = browser_controller();
    controller.dispatch(Intent::SnapshotLoaded(Ok(many(3))));
    controller.dispatch(Intent::PriceDragged(100_500.0));

    let page = Html::parse_document(&render_page(&controller, &config));
    assert_eq!(select_attr(&page, "#priceFilter", "value").as_deref(), Some("100500"));
    assert_eq!(select_text(&page, "#priceLabel"), "100,500");
}

#[test]
fn exported_modal_is_hidden_until_opened() {
    let config = BrowserConfig::default();
    let mut controller = browser_controller();
    controller.dispatch(Intent::SnapshotLoaded(Ok(many(2))));

    let closed = Html::parse_document(&render_page(&controller, &config));
    assert_eq!(select_attr(&closed, "#modal", "style").as_deref(), Some("display:none"));

    controller.dispatch(Intent::OpenDetail("p1".into()));
    let open = Html::parse_document(&render_page(&controller, &config));
    assert_eq!(select_attr(&open, "#modal", "style").as_deref(), Some("display:flex"));
    assert!(select_text(&open, "#modalContent").contains("Property p1"));
}
