use crate::domain::{Category, CriteriaChange, Property};
use crate::errors::LoadError;

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed surface around the content.
    Backdrop,
    Content,
}

/// Everything that can happen to the browser. The host turns its input
/// events into these and feeds them to `Controller::dispatch`.
#[derive(Debug)]
pub enum Intent {
    SnapshotLoaded(Result<Vec<Property>, LoadError>),
    Criteria(CriteriaChange),
    ApplyFilters,
    ResetFilters,
    HeroSearch { query: String, category: Category },
    /// Price control moved. The bound is held and the label follows; the
    /// list is only refiltered by the next apply or criteria change.
    PriceDragged(f64),
    PageSelected(usize),
    ClusterToggled,
    MarkerClicked(String),
    OpenDetail(String),
    CloseModal,
    ModalClicked(ClickTarget),
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SnapshotLoaded(_) => "snapshot_loaded",
            Intent::Criteria(_) => "criteria",
            Intent::ApplyFilters => "apply_filters",
            Intent::ResetFilters => "reset_filters",
            Intent::HeroSearch { .. } => "hero_search",
            Intent::PriceDragged(_) => "price_dragged",
            Intent::PageSelected(_) => "page_selected",
            Intent::ClusterToggled => "cluster_toggled",
            Intent::MarkerClicked(_) => "marker_clicked",
            Intent::OpenDetail(_) => "open_detail",
            Intent::CloseModal => "close_modal",
            Intent::ModalClicked(_) => "modal_clicked",
        }
    }

    /// Which recompute and render steps this intent triggers.
    pub fn render_pass(&self) -> RenderPass {
        match self {
            Intent::SnapshotLoaded(_)
            | Intent::Criteria(_)
            | Intent::ApplyFilters
            | Intent::ResetFilters
            | Intent::HeroSearch { .. } => RenderPass::FULL,
            Intent::PageSelected(_) => RenderPass::PAGE_ONLY,
            Intent::ClusterToggled => RenderPass::MAP_ONLY,
            Intent::PriceDragged(_)
            | Intent::MarkerClicked(_)
            | Intent::OpenDetail(_)
            | Intent::CloseModal
            | Intent::ModalClicked(_) => RenderPass::NONE,
        }
    }
}

/// The recompute graph for one intent, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPass {
    pub reset_page: bool,
    pub refilter: bool,
    pub map: bool,
    pub listings: bool,
    pub metrics: bool,
    pub chart: bool,
    pub price_label: bool,
    pub scroll: bool,
}

impl RenderPass {
    /// Criteria changed: refilter, back to page 1, redraw everything.
    pub const FULL: RenderPass = RenderPass {
        reset_page: true,
        refilter: true,
        map: true,
        listings: true,
        metrics: true,
        chart: true,
        price_label: true,
        scroll: false,
    };

    /// Page changed: same filtered list, new slice.
    pub const PAGE_ONLY: RenderPass = RenderPass {
        listings: true,
        scroll: true,
        ..RenderPass::NONE
    };

    /// Drawing strategy changed: same filtered list, new marker layer.
    pub const MAP_ONLY: RenderPass = RenderPass {
        map: true,
        ..RenderPass::NONE
    };

    pub const NONE: RenderPass = RenderPass {
        reset_page: false,
        refilter: false,
        map: false,
        listings: false,
        metrics: false,
        chart: false,
        price_label: false,
        scroll: false,
    };
}
