use crate::app::state::AppState;
use crate::app::surfaces::{LayerSlot, MapSurface};
use crate::domain::Property;
use crate::templates::components::marker_popup;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Nearby markers are grouped.
    Clustered,
    /// One marker per property.
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub property_id: String,
    pub lat: f64,
    pub lon: f64,
    pub popup_html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLayer {
    pub mode: DrawMode,
    pub markers: Vec<Marker>,
}

/// One marker per mappable property, in list order. Properties without
/// usable coordinates are left off the map.
pub fn build_layer(filtered: &[Property], mode: DrawMode) -> MarkerLayer {
    let markers = filtered
        .iter()
        .filter_map(|p| {
            let pos = p.coordinates()?;
            Some(Marker {
                property_id: p.id.clone(),
                lat: pos.lat,
                lon: pos.lon,
                popup_html: marker_popup(p).into_string(),
            })
        })
        .collect();

    MarkerLayer { mode, markers }
}

/// Draws the filtered list as a fresh layer, then takes down the old one.
pub fn render<M: MapSurface>(state: &AppState, map: &mut M, slot: &mut LayerSlot<M::Handle>) {
    let mode = if state.cluster_mode {
        DrawMode::Clustered
    } else {
        DrawMode::Plain
    };
    let layer = build_layer(&state.filtered, mode);
    tracing::debug!(markers = layer.markers.len(), ?mode, "map layer");

    let handle = map.attach(layer);
    if let Some(previous) = slot.swap(handle) {
        map.detach(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::property;
    use serde_json::json;

    #[test]
    fn invalid_coordinates_are_skipped() {
        let good = property("good", "Villa", 1.0);
        let mut bad = property("bad", "Villa", 1.0);
        bad.location = vec![json!("x"), json!(30.0)];
        let mut missing = property("missing", "Villa", 1.0);
        missing.location.clear();

        let layer = build_layer(&[bad, good, missing], DrawMode::Plain);

        assert_eq!(layer.markers.len(), 1);
        assert_eq!(layer.markers[0].property_id, "good");
    }

    #[test]
    fn popup_summarizes_the_property() {
        let mut p = property("p1", "Villa", 1_250_000.0);
        p.name = "Palm Villa".into();
        p.area = 300.0;

        let layer = build_layer(&[p], DrawMode::Clustered);
        let popup = &layer.markers[0].popup_html;

        assert!(popup.contains("<b>Palm Villa</b>"));
        assert!(popup.contains("Villa • 300 m²"));
        assert!(popup.contains("$1,250,000"));
        assert!(popup.contains(r#"href="property.html?id=p1""#));
    }
}
