use crate::domain::{filter_properties, FilterCriteria, PaginationState, Property, PropertyStore};

/// The price control never tops out below this, whatever the store holds.
pub const MIN_PRICE_CEILING: f64 = 5_000_000.0;

/// Everything the renderers read. Owned by the controller and handed to
/// each renderer by reference.
#[derive(Debug)]
pub struct AppState {
    pub store: PropertyStore,
    pub criteria: FilterCriteria,
    pub pagination: PaginationState,
    pub cluster_mode: bool,
    /// Upper bound of the price control; +inf until the snapshot settles.
    pub price_ceiling: f64,
    /// Last output of the filter/sort engine.
    pub filtered: Vec<Property>,
    /// Id of the property shown in the detail modal, if any.
    pub modal: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            store: PropertyStore::new(),
            criteria: FilterCriteria::default(),
            pagination: PaginationState::default(),
            cluster_mode: true,
            price_ceiling: f64::INFINITY,
            filtered: Vec::new(),
            modal: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the store and sizes the price control to it. Returns
    /// `false` if the store had already been populated.
    pub fn settle_store(&mut self, properties: Vec<Property>) -> bool {
        if self.store.populate(properties).is_err() {
            return false;
        }
        self.price_ceiling = self
            .store
            .max_price()
            .map_or(MIN_PRICE_CEILING, |max| max.max(MIN_PRICE_CEILING));
        self.criteria.max_price = self.price_ceiling;
        true
    }

    pub fn refilter(&mut self) {
        self.filtered = filter_properties(self.store.all(), &self.criteria);
    }

    pub fn page_items(&self) -> &[Property] {
        self.pagination.slice(&self.filtered)
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered.len())
    }
}
