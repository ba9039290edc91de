use crate::app::{Intent, PageSurface, Region};
use crate::host::HostEvent;
use maud::Markup;
use std::collections::BTreeMap;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// In-memory page: the latest markup per region, plus modal and scroll state.
pub struct HtmlDocument {
    regions: BTreeMap<Region, String>,
    modal_visible: bool,
    scroll_top: u32,
    events: Sender<HostEvent>,
}

impl HtmlDocument {
    pub fn new(events: Sender<HostEvent>) -> Self {
        Self {
            regions: BTreeMap::new(),
            modal_visible: false,
            scroll_top: 0,
            events,
        }
    }

    pub fn regions(&self) -> &BTreeMap<Region, String> {
        &self.regions
    }

    #[cfg(test)]
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }
}

impl PageSurface for HtmlDocument {
    fn render(&mut self, region: Region, markup: Markup) {
        self.regions.insert(region, markup.into_string());
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn scroll_to(&mut self, top: u32) {
        self.scroll_top = top;
    }

    fn defer(&mut self, delay: Duration, intent: Intent) {
        let events = self.events.clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            // The loop may already be gone at shutdown.
            let _ = events.send(HostEvent::Intent(intent));
        });
    }
}
