use crate::domain::property::Property;
use std::cell::OnceCell;

/// The session's property list. Populated exactly once, never mutated after.
#[derive(Debug, Default)]
pub struct PropertyStore {
    properties: OnceCell<Vec<Property>>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the store. A second call is refused and hands the rejected list back.
    pub fn populate(&self, properties: Vec<Property>) -> Result<(), Vec<Property>> {
        self.properties.set(properties)
    }

    /// `false` until the snapshot fetch has settled (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.properties.get().is_some()
    }

    /// Every property in feed order; empty before load.
    pub fn all(&self) -> &[Property] {
        self.properties.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.all().iter().find(|p| p.id == id)
    }

    /// Distinct types in first-seen order, for the category selector.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for p in self.all() {
            if !seen.contains(&p.property_type.as_str()) {
                seen.push(&p.property_type);
            }
        }
        seen
    }

    pub fn max_price(&self) -> Option<f64> {
        self.all().iter().map(|p| p.price).reduce(f64::max)
    }
}
