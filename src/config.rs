use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::snapshot::DataSource;

const DEFAULT_DATA_SOURCE: &str = "data/properties.geojson";
const DEFAULT_OUTPUT: &str = "listings.html";
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Tile provider the exported map draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct TileConfig {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

/// Initial map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

/// Knobs the controller needs at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Gap between a marker click and the modal opening, so the popup shows first.
    pub modal_delay: Duration,
    /// Vertical offset the page scrolls to after a page-button click.
    pub scroll_offset: u32,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            modal_delay: Duration::from_millis(250),
            scroll_offset: 400,
        }
    }
}

/// Browser configuration loaded from environment variables (and an optional `.env`).
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub data_source: DataSource,
    pub output_path: PathBuf,
    pub tiles: TileConfig,
    pub map_view: MapView,
    pub view: ViewOptions,
    pub fetch_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            data_source: DataSource::parse(DEFAULT_DATA_SOURCE),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            tiles: TileConfig {
                url_template: DEFAULT_TILE_URL.to_string(),
                max_zoom: 19,
                attribution: String::new(),
            },
            map_view: MapView {
                center_lat: 30.0444,
                center_lon: 31.2357,
                zoom: 11,
            },
            view: ViewOptions::default(),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl BrowserConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(source) = lookup("LISTINGS_DATA_SOURCE") {
            config.data_source = DataSource::parse(&source);
        }
        if let Some(output) = lookup("LISTINGS_OUTPUT") {
            config.output_path = PathBuf::from(output);
        }
        if let Some(url) = lookup("LISTINGS_TILE_URL") {
            config.tiles.url_template = url;
        }
        if let Some(attribution) = lookup("LISTINGS_TILE_ATTRIBUTION") {
            config.tiles.attribution = attribution;
        }
        parse_into(&lookup, "LISTINGS_TILE_MAX_ZOOM", &mut config.tiles.max_zoom);
        parse_into(&lookup, "LISTINGS_MAP_ZOOM", &mut config.map_view.zoom);

        if let Some(raw) = lookup("LISTINGS_MAP_CENTER") {
            match parse_center(&raw) {
                Some((lat, lon)) => {
                    config.map_view.center_lat = lat;
                    config.map_view.center_lon = lon;
                }
                None => tracing::warn!("LISTINGS_MAP_CENTER={raw:?} is not `lat,lon`; keeping default"),
            }
        }

        let mut delay_ms = config.view.modal_delay.as_millis() as u64;
        parse_into(&lookup, "LISTINGS_MODAL_DELAY_MS", &mut delay_ms);
        config.view.modal_delay = Duration::from_millis(delay_ms);

        parse_into(&lookup, "LISTINGS_SCROLL_OFFSET", &mut config.view.scroll_offset);

        let mut timeout_secs = config.fetch_timeout.as_secs();
        parse_into(&lookup, "LISTINGS_FETCH_TIMEOUT_SECS", &mut timeout_secs);
        config.fetch_timeout = Duration::from_secs(timeout_secs);

        config
    }

    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  data source: {}", self.data_source);
        tracing::info!("  output: {}", self.output_path.display());
        tracing::info!("  tiles: {} (max zoom {})", self.tiles.url_template, self.tiles.max_zoom);
        tracing::info!("  modal delay: {:?}", self.view.modal_delay);
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => tracing::warn!("{key}={raw:?} is not valid; keeping default"),
        }
    }
}

fn parse_center(raw: &str) -> Option<(f64, f64)> {
    let (lat, lon) = raw.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}
