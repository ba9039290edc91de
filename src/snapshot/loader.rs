// loader.rs
use crate::domain::property::Property;
use crate::errors::LoadError;
use crate::snapshot::models::FeatureCollection;
use reqwest::blocking::Client;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::Duration;
use url::Url;

/// Where the snapshot lives: a remote URL or a file on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Remote(Url),
    File(PathBuf),
}

impl DataSource {
    /// `http(s)://` locations are fetched, anything else is read from disk.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DataSource::Remote(url),
            _ => DataSource::File(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct SnapshotLoader {
    source: DataSource,
    timeout: Duration,
}

impl SnapshotLoader {
    pub fn new(source: DataSource, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Runs the single snapshot load on its own thread and hands the result
    /// to `on_done`. There is no retry: one attempt per session.
    pub fn spawn<F>(self, on_done: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<Property>, LoadError>) + Send + 'static,
    {
        std::thread::spawn(move || on_done(self.load_timed()))
    }

    /// `load` with timing. Failures are left for the receiver to report.
    pub fn load_timed(&self) -> Result<Vec<Property>, LoadError> {
        tracing::info!("Loading snapshot from {}", self.source);
        let started = std::time::Instant::now();
        let result = self.load();

        match &result {
            Ok(properties) => tracing::info!(
                "Snapshot loaded: {} properties in {:?}",
                properties.len(),
                started.elapsed()
            ),
            Err(_) => tracing::debug!("Snapshot load gave up after {:?}", started.elapsed()),
        }
        result
    }

    pub fn load(&self) -> Result<Vec<Property>, LoadError> {
        let body = match &self.source {
            DataSource::Remote(url) => self.fetch(url)?,
            DataSource::File(path) => std::fs::read_to_string(path).map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?,
        };

        parse_snapshot(&body)
    }

    fn fetch(&self, url: &Url) -> Result<String, LoadError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let resp = client
            .get(url.clone())
            .send()
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| LoadError::Network(e.to_string()))
    }
}

/// Parses a GeoJSON feature collection into normalized properties, in feed order.
pub fn parse_snapshot(body: &str) -> Result<Vec<Property>, LoadError> {
    let collection: FeatureCollection =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;

    let mut rng = rand::thread_rng();
    let mut taken: HashSet<String> = collection
        .features
        .iter()
        .filter_map(|f| f.properties.as_ref()?.id.as_ref())
        .filter_map(|id| match id {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect();

    Ok(collection
        .features
        .iter()
        .map(|feature| Property::from_feature(feature, &mut taken, &mut rng))
        .collect())
}
