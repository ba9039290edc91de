//! Headless host: implements the drawing capabilities in memory and
//! exports the current view as a standalone HTML page.

pub mod commands;
pub mod document;
pub mod registry;

pub use commands::parse_command;
pub use document::HtmlDocument;
pub use registry::HandleRegistry;

use crate::app::{Controller, Intent};
use crate::config::BrowserConfig;
use crate::render::map::MarkerLayer;
use crate::render::metrics::DistributionChart;
use crate::templates::pages::{browser_page, BrowserVm};
use std::path::Path;

pub type BrowserController =
    Controller<HandleRegistry<MarkerLayer>, HandleRegistry<DistributionChart>, HtmlDocument>;

/// Everything the host loop reacts to.
#[derive(Debug)]
pub enum HostEvent {
    Intent(Intent),
    /// Command input reached end of file.
    InputClosed,
    Quit,
}

/// Renders the controller's current view into one HTML document.
pub fn render_page(controller: &BrowserController, config: &BrowserConfig) -> String {
    let state = controller.state();
    let vm = BrowserVm {
        regions: controller.page().regions(),
        modal_visible: controller.page().modal_visible(),
        criteria: &state.criteria,
        categories: state.store.categories(),
        price_ceiling: state.price_ceiling,
        cluster_mode: state.cluster_mode,
        marker_layer: controller
            .marker_layer()
            .and_then(|id| controller.map().get(id)),
        chart: controller
            .chart_instance()
            .and_then(|id| controller.chart().get(id)),
        tiles: &config.tiles,
        map_view: config.map_view,
        scroll_top: controller.page().scroll_top(),
    };
    browser_page(&vm).into_string()
}

pub fn export_page(
    controller: &BrowserController,
    config: &BrowserConfig,
    path: &Path,
) -> std::io::Result<()> {
    std::fs::write(path, render_page(controller, config))
}
