// src/domain/metrics.rs

use crate::domain::property::Property;

/// Headline numbers for the whole store (not the filtered view).
#[derive(Debug, Clone, PartialEq)]
pub struct StoreMetrics {
    pub count: usize,
    /// Rounded to the nearest integer; `None` for an empty store.
    pub average_price: Option<f64>,
    /// Most frequent type; the first one seen wins a tie.
    pub top_type: Option<String>,
}

impl StoreMetrics {
    pub fn compute(properties: &[Property]) -> Self {
        let count = properties.len();
        let average_price = (count > 0).then(|| {
            let total: f64 = properties.iter().map(|p| p.price).sum();
            (total / count as f64).round()
        });

        let top_type = TypeDistribution::compute(properties)
            .segments
            .into_iter()
            // `max_by_key` keeps the last maximum, so scan in reverse
            .rev()
            .max_by_key(|(_, n)| *n)
            .map(|(t, _)| t);

        Self {
            count,
            average_price,
            top_type,
        }
    }
}

/// Count per distinct type, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeDistribution {
    pub segments: Vec<(String, usize)>,
}

impl TypeDistribution {
    pub fn compute(properties: &[Property]) -> Self {
        let mut segments: Vec<(String, usize)> = Vec::new();
        for p in properties {
            match segments.iter_mut().find(|(t, _)| *t == p.property_type) {
                Some((_, n)) => *n += 1,
                None => segments.push((p.property_type.clone(), 1)),
            }
        }
        Self { segments }
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.segments.iter().map(|(_, n)| n).sum()
    }
}
