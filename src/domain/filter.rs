// src/domain/filter.rs

use crate::domain::criteria::{FilterCriteria, SortMode};
use crate::domain::property::Property;

/// Produces the filtered, sorted view of `properties`. Pure: the input is
/// never touched and every call returns a fresh list.
///
/// A bedroom or area floor only applies to properties that report a
/// non-zero value; a zero is read as "unknown" and passes.
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let query = criteria.query.trim().to_lowercase();

    let mut filtered: Vec<Property> = properties
        .iter()
        .filter(|p| matches(p, criteria, &query))
        .cloned()
        .collect();

    sort_properties(&mut filtered, criteria.sort);
    filtered
}

fn matches(p: &Property, criteria: &FilterCriteria, query: &str) -> bool {
    if !criteria.category.matches(&p.property_type) {
        return false;
    }
    if p.price > criteria.max_price {
        return false;
    }
    if criteria.min_beds > 0 && p.beds > 0 && p.beds < criteria.min_beds {
        return false;
    }
    if criteria.min_area > 0.0 && p.area > 0.0 && p.area < criteria.min_area {
        return false;
    }
    if !query.is_empty()
        && !(p.name.to_lowercase().contains(query) || p.description.to_lowercase().contains(query))
    {
        return false;
    }
    true
}

/// Stable sort; `SortMode::None` leaves feed order alone.
pub fn sort_properties(properties: &mut [Property], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::PriceAsc => properties.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => properties.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::AreaDesc => properties.sort_by(|a, b| b.area.total_cmp(&a.area)),
    }
}
