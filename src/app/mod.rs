pub mod controller;
pub mod intent;
pub mod state;
pub mod surfaces;

pub use controller::Controller;
pub use intent::{ClickTarget, Intent};
pub use surfaces::{ChartSurface, MapSurface, PageSurface, Region};
