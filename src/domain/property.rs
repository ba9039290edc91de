// src/domain/property.rs

use crate::snapshot::models::{Feature, FeatureProperties};
use rand::Rng;
use serde_json::Value;
use std::collections::HashSet;

pub const PLACEHOLDER_NAME: &str = "No name";
pub const PLACEHOLDER_TYPE: &str = "Other";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600";

const GENERATED_ID_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A listing as loaded from the snapshot, with every field defaulted.
/// This is the anti-corruption layer between the raw feed and the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Square meters.
    pub area: f64,
    pub property_type: String,
    pub beds: u32,
    pub description: String,
    pub image_url: String,
    /// `[longitude, latitude]` exactly as the feed supplied it.
    pub location: Vec<Value>,
}

/// A parsed map position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl Property {
    /// Flattens a raw feature into a `Property`. Never fails: malformed
    /// fields fall back to their defaults and a missing id is generated.
    pub fn from_feature<R: Rng>(feature: &Feature, taken_ids: &mut HashSet<String>, rng: &mut R) -> Self {
        let empty = FeatureProperties::default();
        let props = feature.properties.as_ref().unwrap_or(&empty);

        let id = identifier(props.id.as_ref()).unwrap_or_else(|| generate_id(taken_ids, rng));
        taken_ids.insert(id.clone());

        Property {
            id,
            name: text(props.name.as_ref()).unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            price: non_negative(props.price.as_ref()),
            area: non_negative(props.area.as_ref()),
            property_type: text(props.property_type.as_ref())
                .unwrap_or_else(|| PLACEHOLDER_TYPE.to_string()),
            beds: non_negative(props.beds.as_ref()).floor() as u32,
            description: text(props.description.as_ref()).unwrap_or_default(),
            image_url: text(props.image.as_ref()).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            location: feature
                .geometry
                .as_ref()
                .and_then(|g| g.coordinates.as_ref())
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// The marker position, or `None` when either coordinate is missing or non-numeric.
    pub fn coordinates(&self) -> Option<LatLon> {
        let lon = coordinate(self.location.first()?)?;
        let lat = coordinate(self.location.get(1)?)?;
        Some(LatLon { lat, lon })
    }
}

/// Numeric coercion for feed fields: numbers and numeric strings pass,
/// everything else (and anything negative or non-finite) becomes 0.
pub fn non_negative(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

fn coordinate(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

// Ids are opaque: numeric ids in the feed are kept as their decimal text.
fn identifier(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::Number(n)) => Some(n.to_string()),
        other => text(other),
    }
}

fn generate_id<R: Rng>(taken: &HashSet<String>, rng: &mut R) -> String {
    loop {
        let candidate: String = (0..GENERATED_ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn feature(value: Value) -> Feature {
        serde_json::from_value(value).unwrap()
    }

    fn normalize(value: Value) -> Property {
        let mut rng = StdRng::seed_from_u64(7);
        Property::from_feature(&feature(value), &mut HashSet::new(), &mut rng)
    }

    #[test]
    fn complete_record_is_kept_as_is() {
        let p = normalize(json!({
            "properties": {
                "id": "p-1", "name": "Nile View", "price": 250000, "area": 120.5,
                "type": "Apartment", "beds": 3, "desc": "River side", "image": "img.jpg"
            },
            "geometry": { "coordinates": [31.23, 30.04] }
        }));

        assert_eq!(p.id, "p-1");
        assert_eq!(p.name, "Nile View");
        assert_eq!(p.price, 250000.0);
        assert_eq!(p.area, 120.5);
        assert_eq!(p.property_type, "Apartment");
        assert_eq!(p.beds, 3);
        assert_eq!(p.description, "River side");
        assert_eq!(p.image_url, "img.jpg");
        assert_eq!(p.coordinates(), Some(LatLon { lat: 30.04, lon: 31.23 }));
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let p = normalize(json!({
            "properties": {
                "name": "", "price": "not a price", "area": null, "type": 42,
                "beds": "2", "image": ""
            },
            "geometry": null
        }));

        assert_eq!(p.id.len(), GENERATED_ID_LEN);
        assert_eq!(p.name, PLACEHOLDER_NAME);
        assert_eq!(p.price, 0.0);
        assert_eq!(p.area, 0.0);
        assert_eq!(p.property_type, PLACEHOLDER_TYPE);
        assert_eq!(p.beds, 2);
        assert_eq!(p.description, "");
        assert_eq!(p.image_url, PLACEHOLDER_IMAGE);
        assert!(p.location.is_empty());
        assert_eq!(p.coordinates(), None);
    }

    #[test]
    fn negative_numbers_are_clamped_to_zero() {
        let p = normalize(json!({ "properties": { "price": -10, "beds": -1 } }));
        assert_eq!(p.price, 0.0);
        assert_eq!(p.beds, 0);
    }

    #[test]
    fn numeric_ids_become_text() {
        let p = normalize(json!({ "properties": { "id": 17 } }));
        assert_eq!(p.id, "17");
    }

    #[test]
    fn generated_ids_do_not_collide_with_taken_ones() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut taken = HashSet::new();
        let raw = feature(json!({ "properties": {} }));

        let first = Property::from_feature(&raw, &mut taken, &mut rng);
        let second = Property::from_feature(&raw, &mut taken, &mut rng);

        assert_ne!(first.id, second.id);
        assert!(taken.contains(&first.id) && taken.contains(&second.id));
    }

    #[test]
    fn non_numeric_coordinates_are_not_mappable() {
        let p = normalize(json!({ "geometry": { "coordinates": ["east", 30.0] } }));
        assert_eq!(p.coordinates(), None);
        assert_eq!(p.location.len(), 2);

        let p = normalize(json!({ "geometry": { "coordinates": ["31.2", "30.0"] } }));
        assert_eq!(p.coordinates(), Some(LatLon { lat: 30.0, lon: 31.2 }));
    }
}
