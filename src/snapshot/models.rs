use serde::Deserialize;
use serde_json::Value;

// collection
//  └── features[]
//       ├── properties
//       │    ├── id
//       │    ├── name
//       │    ├── price
//       │    ├── area
//       │    ├── type
//       │    ├── beds
//       │    ├── desc
//       │    └── image
//       └── geometry
//            └── coordinates   [lon, lat]
//
// Leaf fields are kept as raw JSON values; `Property::from_feature` decides
// what counts as malformed.

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub area: Option<Value>,
    #[serde(default, rename = "type")]
    pub property_type: Option<Value>,
    #[serde(default)]
    pub beds: Option<Value>,
    #[serde(default, rename = "desc")]
    pub description: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Option<Value>,
}
