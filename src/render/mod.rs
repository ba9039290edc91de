//! Renderers: each reads `AppState` and draws one part of the browser.

pub mod listings;
pub mod map;
pub mod metrics;
pub mod modal;
