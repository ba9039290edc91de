use crate::app::{ChartSurface, MapSurface};
use crate::render::map::MarkerLayer;
use crate::render::metrics::DistributionChart;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u64);

/// Keeps every drawn instance until it is released. Anything still here
/// besides the newest entry is a leak.
#[derive(Debug)]
pub struct HandleRegistry<T> {
    live: BTreeMap<LayerId, T>,
    next_id: u64,
    released: usize,
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self {
            live: BTreeMap::new(),
            next_id: 1,
            released: 0,
        }
    }
}

impl<T> HandleRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, item: T) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, item);
        id
    }

    fn remove(&mut self, id: LayerId) {
        match self.live.remove(&id) {
            Some(_) => self.released += 1,
            None => tracing::warn!("Release of unknown handle {id:?}"),
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn released_count(&self) -> usize {
        self.released
    }

    pub fn get(&self, id: &LayerId) -> Option<&T> {
        self.live.get(id)
    }

    /// Most recently drawn instance still alive.
    #[cfg(test)]
    pub fn latest(&self) -> Option<&T> {
        self.live.values().next_back()
    }
}

impl MapSurface for HandleRegistry<MarkerLayer> {
    type Handle = LayerId;

    fn attach(&mut self, layer: MarkerLayer) -> LayerId {
        self.insert(layer)
    }

    fn detach(&mut self, handle: LayerId) {
        self.remove(handle)
    }
}

impl ChartSurface for HandleRegistry<DistributionChart> {
    type Handle = LayerId;

    fn draw(&mut self, chart: DistributionChart) -> LayerId {
        self.insert(chart)
    }

    fn destroy(&mut self, handle: LayerId) {
        self.remove(handle)
    }
}
