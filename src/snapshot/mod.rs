mod loader;
pub mod models;

pub use loader::{DataSource, SnapshotLoader};
