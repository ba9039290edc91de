use crate::app::intent::{ClickTarget, Intent, RenderPass};
use crate::app::state::AppState;
use crate::app::surfaces::{ChartSurface, LayerSlot, MapSurface, PageSurface};
use crate::config::ViewOptions;
use crate::domain::CriteriaChange;
use crate::render;

/// Owns the application state and the surfaces it draws on. All input
/// arrives through `dispatch`, one intent at a time.
pub struct Controller<M: MapSurface, C: ChartSurface, P: PageSurface> {
    state: AppState,
    map: M,
    chart: C,
    page: P,
    marker_layer: LayerSlot<M::Handle>,
    chart_instance: LayerSlot<C::Handle>,
    options: ViewOptions,
}

impl<M: MapSurface, C: ChartSurface, P: PageSurface> Controller<M, C, P> {
    pub fn new(map: M, chart: C, page: P, options: ViewOptions) -> Self {
        Self {
            state: AppState::new(),
            map,
            chart,
            page,
            marker_layer: LayerSlot::default(),
            chart_instance: LayerSlot::default(),
            options,
        }
    }

    /// First pass before the snapshot arrives: every view in its empty state.
    pub fn start(&mut self) {
        self.run(RenderPass {
            map: true,
            listings: true,
            metrics: true,
            price_label: true,
            ..RenderPass::NONE
        });
    }

    pub fn dispatch(&mut self, intent: Intent) -> RenderPass {
        tracing::debug!(intent = intent.name(), "dispatch");
        let pass = intent.render_pass();

        match intent {
            Intent::SnapshotLoaded(Ok(properties)) => {
                if !self.state.settle_store(properties) {
                    tracing::warn!("Snapshot already loaded; ignoring second load");
                    return RenderPass::NONE;
                }
            }
            Intent::SnapshotLoaded(Err(e)) => {
                tracing::error!("Load data error: {e}");
                if !self.state.settle_store(Vec::new()) {
                    return RenderPass::NONE;
                }
            }
            Intent::Criteria(change) => self.state.criteria.apply(change),
            Intent::ApplyFilters => {}
            Intent::ResetFilters => {
                let ceiling = self.state.price_ceiling;
                self.state.criteria.reset(ceiling);
            }
            Intent::HeroSearch { query, category } => {
                self.state.criteria.query = query;
                self.state.criteria.category = category;
            }
            Intent::PriceDragged(price) => {
                self.state.criteria.apply(CriteriaChange::MaxPrice(price));
                render::metrics::render_price_label(price, &mut self.page);
            }
            Intent::PageSelected(n) => self.state.pagination.go_to(n),
            Intent::ClusterToggled => self.state.cluster_mode = !self.state.cluster_mode,
            Intent::MarkerClicked(id) => {
                if self.options.modal_delay.is_zero() {
                    render::modal::open(&mut self.state, &mut self.page, &id);
                } else {
                    self.page.defer(self.options.modal_delay, Intent::OpenDetail(id));
                }
            }
            Intent::OpenDetail(id) => {
                if !render::modal::open(&mut self.state, &mut self.page, &id) {
                    tracing::debug!("No property with id {id:?}; modal left closed");
                }
            }
            Intent::CloseModal => render::modal::close(&mut self.state, &mut self.page),
            Intent::ModalClicked(ClickTarget::Backdrop) => {
                render::modal::close(&mut self.state, &mut self.page)
            }
            Intent::ModalClicked(ClickTarget::Content) => {}
        }

        self.run(pass);
        pass
    }

    fn run(&mut self, pass: RenderPass) {
        if pass.reset_page {
            self.state.pagination.reset();
        }
        if pass.refilter {
            self.state.refilter();
            tracing::debug!(
                results = self.state.filtered.len(),
                total = self.state.store.all().len(),
                "filtered"
            );
        }
        if pass.price_label {
            render::metrics::render_price_label(self.state.criteria.max_price, &mut self.page);
        }
        if pass.map {
            render::map::render(&self.state, &mut self.map, &mut self.marker_layer);
        }
        if pass.listings {
            render::listings::render(&self.state, &mut self.page);
        }
        if pass.metrics {
            render::metrics::render_metrics(&self.state, &mut self.page);
        }
        if pass.chart {
            render::metrics::render_chart(&self.state, &mut self.chart, &mut self.chart_instance);
        }
        if pass.scroll {
            self.page.scroll_to(self.options.scroll_offset);
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn marker_layer(&self) -> Option<&M::Handle> {
        self.marker_layer.current()
    }

    pub fn chart_instance(&self) -> Option<&C::Handle> {
        self.chart_instance.current()
    }
}
