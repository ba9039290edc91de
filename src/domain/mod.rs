pub mod criteria;
pub mod filter;
pub mod metrics;
pub mod pagination;
pub mod property;
pub mod store;

pub use criteria::{Category, CriteriaChange, FilterCriteria, SortMode};
pub use filter::filter_properties;
pub use metrics::{StoreMetrics, TypeDistribution};
pub use pagination::PaginationState;
pub use property::Property;
pub use store::PropertyStore;
