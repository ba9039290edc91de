use crate::app::surfaces::Region;
use crate::config::{MapView, TileConfig};
use crate::domain::{Category, FilterCriteria, SortMode};
use crate::render::map::MarkerLayer;
use crate::render::metrics::DistributionChart;
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;
use std::collections::BTreeMap;

/// Draws the exported marker layer and chart with Leaflet / Chart.js.
const BOOTSTRAP_JS: &str = r#"
const read = id => JSON.parse(document.getElementById(id).textContent);
const view = read('mapConfig');
const map = L.map('map').setView([view.center_lat, view.center_lon], view.zoom);
L.tileLayer(view.tiles.url_template, {maxZoom: view.tiles.max_zoom, attribution: view.tiles.attribution}).addTo(map);
const layer = read('markerLayer');
if (layer) {
  const group = layer.mode === 'clustered' ? L.markerClusterGroup() : L.layerGroup();
  layer.markers.forEach(m => L.marker([m.lat, m.lon]).bindPopup(m.popup_html).addTo(group));
  group.addTo(map);
}
const chart = read('chartData');
if (chart) {
  new Chart(document.getElementById('chartType').getContext('2d'), {
    type: 'doughnut',
    data: {labels: chart.labels, datasets: [{data: chart.values, backgroundColor: chart.colors}]},
    options: {plugins: {legend: {position: 'bottom'}}}
  });
}
"#;

pub struct BrowserVm<'a> {
    pub regions: &'a BTreeMap<Region, String>,
    pub modal_visible: bool,
    pub criteria: &'a FilterCriteria,
    pub categories: Vec<&'a str>,
    pub price_ceiling: f64,
    pub cluster_mode: bool,
    pub marker_layer: Option<&'a MarkerLayer>,
    pub chart: Option<&'a DistributionChart>,
    pub tiles: &'a TileConfig,
    pub map_view: MapView,
    pub scroll_top: u32,
}

#[derive(Serialize)]
struct MapConfig<'a> {
    center_lat: f64,
    center_lon: f64,
    zoom: u8,
    tiles: TileJson<'a>,
}

#[derive(Serialize)]
struct TileJson<'a> {
    url_template: &'a str,
    max_zoom: u8,
    attribution: &'a str,
}

pub fn browser_page(vm: &BrowserVm) -> Markup {
    let map_config = MapConfig {
        center_lat: vm.map_view.center_lat,
        center_lon: vm.map_view.center_lon,
        zoom: vm.map_view.zoom,
        tiles: TileJson {
            url_template: &vm.tiles.url_template,
            max_zoom: vm.tiles.max_zoom,
            attribution: &vm.tiles.attribution,
        },
    };

    desktop_layout(
        "Property Listings",
        html! {
            (hero_search(vm))
            main class="container" {
                aside class="filters" {
                    (filter_panel(vm))
                }
                section class="metrics" {
                    div class="metric" { span { "Listings" } (region(vm, "strong", None, Region::MetricCount)) }
                    div class="metric" { span { "Average price" } (region(vm, "strong", None, Region::MetricAverage)) }
                    div class="metric" { span { "Most common type" } (region(vm, "strong", None, Region::MetricTopType)) }
                    canvas #chartType {}
                }
                section class="map-panel" {
                    div class="map-toolbar" {
                        button #btnCluster class=(if vm.cluster_mode { "btn primary" } else { "btn ghost" }) {
                            @if vm.cluster_mode { "Clustered" } @else { "Unclustered" }
                        }
                    }
                    div #map style="height:420px" {}
                }
                section class="results" {
                    div class="results-header" {
                        (region(vm, "span", None, Region::ResultsInfo))
                        (sort_select(vm.criteria.sort))
                    }
                    (region(vm, "div", Some("grid"), Region::Listings))
                    (region(vm, "div", Some("pagination"), Region::Pagination))
                }
            }
            div #modal class="modal" style=(if vm.modal_visible { "display:flex" } else { "display:none" }) {
                div class="modal-inner" {
                    button #modalClose class="btn ghost" { "×" }
                    (region(vm, "div", None, Region::ModalContent))
                }
            }
            (json_island("mapConfig", &map_config))
            (json_island("markerLayer", &vm.marker_layer))
            (json_island("chartData", &vm.chart))
            script { (PreEscaped(BOOTSTRAP_JS)) }
            @if vm.scroll_top > 0 {
                script { (PreEscaped(format!("window.scrollTo({{top: {}, behavior: 'smooth'}});", vm.scroll_top))) }
            }
        },
    )
}

fn hero_search(vm: &BrowserVm) -> Markup {
    html! {
        section class="hero" {
            h1 { "Find your next home" }
            div class="hero-search" {
                input #heroSearch type="search" placeholder="Search by name or description" value=(vm.criteria.query);
                (category_select("heroType", &vm.categories, &vm.criteria.category))
                button #heroBtn class="btn primary" { "Search" }
                button #openAll class="btn ghost" { "Show all" }
            }
        }
    }
}

fn filter_panel(vm: &BrowserVm) -> Markup {
    let ceiling = if vm.price_ceiling.is_finite() {
        vm.price_ceiling
    } else {
        crate::app::state::MIN_PRICE_CEILING
    };
    let price_value = vm.criteria.max_price.min(ceiling);

    html! {
        label for="typeFilter" { "Type" }
        (category_select("typeFilter", &vm.categories, &vm.criteria.category))

        label for="priceFilter" { "Max price: " (region(vm, "span", None, Region::PriceLabel)) }
        input #priceFilter type="range" min="0" max=(ceiling) step="1000" value=(price_value);

        label for="bedsFilter" { "Min rooms" }
        input #bedsFilter type="number" min="0" value=(vm.criteria.min_beds);

        label for="areaFilter" { "Min area (m²)" }
        input #areaFilter type="number" min="0" value=(vm.criteria.min_area);

        label for="globalSearch" { "Search" }
        input #globalSearch type="search" value=(vm.criteria.query);

        div class="filter-actions" {
            (crate::templates::components::button("Apply", "applyBtn", "btn primary"))
            (crate::templates::components::button("Reset", "resetBtn", "btn ghost"))
        }
    }
}

fn category_select(id: &str, categories: &[&str], selected: &Category) -> Markup {
    html! {
        select id=(id) {
            option value="all" selected[*selected == Category::All] { "All types" }
            @for t in categories {
                option value=(t) selected[selected.as_str() == *t && *selected != Category::All] { (t) }
            }
        }
    }
}

fn sort_select(current: SortMode) -> Markup {
    html! {
        select #sortBy {
            @for mode in SortMode::ALL {
                option value=(mode.as_str()) selected[mode == current] { (mode.label()) }
            }
        }
    }
}

/// The container a renderer fills, carrying the region's element id.
fn region(vm: &BrowserVm, tag: &str, class: Option<&str>, region: Region) -> Markup {
    let content = PreEscaped(vm.regions.get(&region).map(String::as_str).unwrap_or_default());
    let id = region.element_id();
    match tag {
        "strong" => html! { strong id=(id) class=[class] { (content) } },
        "span" => html! { span id=(id) class=[class] { (content) } },
        _ => html! { div id=(id) class=[class] { (content) } },
    }
}

fn json_island<T: Serialize>(id: &str, value: &T) -> Markup {
    let json = match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            tracing::warn!("Could not serialize {id}: {e}");
            "null".to_string()
        }
    };
    html! {
        script type="application/json" id=(id) { (PreEscaped(json)) }
    }
}
