//! Capabilities the browser draws through. The map engine, chart engine
//! and page toolkit live outside this crate; these traits are the seam.

use crate::app::intent::Intent;
use crate::render::map::MarkerLayer;
use crate::render::metrics::DistributionChart;
use maud::Markup;
use std::time::Duration;

pub trait MapSurface {
    type Handle;

    /// Draws `layer` and returns the handle needed to take it down again.
    fn attach(&mut self, layer: MarkerLayer) -> Self::Handle;
    fn detach(&mut self, handle: Self::Handle);
}

pub trait ChartSurface {
    type Handle;

    fn draw(&mut self, chart: DistributionChart) -> Self::Handle;
    fn destroy(&mut self, handle: Self::Handle);
}

/// Named areas of the page a renderer can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Listings,
    Pagination,
    ResultsInfo,
    MetricCount,
    MetricAverage,
    MetricTopType,
    PriceLabel,
    ModalContent,
}

impl Region {
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Listings => "listings",
            Region::Pagination => "pagination",
            Region::ResultsInfo => "resultsInfo",
            Region::MetricCount => "metricCount",
            Region::MetricAverage => "metricAvg",
            Region::MetricTopType => "metricTop",
            Region::PriceLabel => "priceLabel",
            Region::ModalContent => "modalContent",
        }
    }
}

pub trait PageSurface {
    /// Replaces the contents of `region`.
    fn render(&mut self, region: Region, markup: Markup);
    fn set_modal_visible(&mut self, visible: bool);
    fn scroll_to(&mut self, top: u32);
    /// Delivers `intent` back to the controller after `delay`.
    fn defer(&mut self, delay: Duration, intent: Intent);
}

/// Holds the one live handle of a redrawn layer. Replacement is
/// attach-new, then release-old: the caller attaches, swaps the new handle
/// in, and detaches whatever comes back.
#[derive(Debug)]
pub struct LayerSlot<H> {
    current: Option<H>,
}

impl<H> Default for LayerSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> LayerSlot<H> {
    #[must_use = "the previous handle must be released"]
    pub fn swap(&mut self, incoming: H) -> Option<H> {
        self.current.replace(incoming)
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }
}
