mod fetch;

use crate::config::DatasetConfig;
use crate::error::{Error, Result};
use geojson::{Feature, GeoJson, Geometry, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A geographic line or ring (sequence of lon/lat coordinates)
pub type LineString = Vec<(f64, f64)>;

/// Exterior ring first, then holes
pub type Polygon = Vec<LineString>;

/// Attribute keys holding the long country name, newest release first
const NAME_KEYS: [&str; 2] = ["NAME_LONG", "name_long"];

/// Natural Earth scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Low,    // 110m - world view
    Medium, // 50m
    High,   // 10m
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Low => "110m",
            Resolution::Medium => "50m",
            Resolution::High => "10m",
        }
    }
}

/// Natural Earth theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cultural,
    Physical,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Physical => "physical",
        }
    }
}

/// One Natural Earth dataset file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub resolution: Resolution,
    pub category: Category,
    pub name: String,
}

impl Layer {
    pub fn new(resolution: Resolution, category: Category, name: &str) -> Self {
        Self {
            resolution,
            category,
            name: name.to_string(),
        }
    }

    /// Name of the cached file, e.g. `ne_110m_admin_0_countries.json`
    pub fn file_name(&self) -> String {
        format!("ne_{}_{}.json", self.resolution.as_str(), self.name)
    }

    /// Name of the file on the download mirror
    fn remote_name(&self) -> String {
        format!("ne_{}_{}.geojson", self.resolution.as_str(), self.name)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category.as_str(), self.file_name())
    }
}

/// A country boundary with its canonical long-form name
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub name: String,
    pub polygons: Vec<Polygon>,
}

/// Read-only access to Natural Earth layers on disk, fetched on demand
pub struct NaturalEarth<'a> {
    config: &'a DatasetConfig,
}

impl<'a> NaturalEarth<'a> {
    pub fn new(config: &'a DatasetConfig) -> Self {
        Self { config }
    }

    /// Path to the layer in the cache, downloading it first if needed
    pub fn acquire(&self, layer: &Layer) -> Result<PathBuf> {
        let path = self.config.cache_dir.join(layer.file_name());
        if path.is_file() {
            debug!("Using cached layer {:?}", path);
            return Ok(path);
        }

        if !self.config.download {
            return Err(Error::DatasetUnavailable(format!(
                "{} not found at {} and downloading is disabled",
                layer,
                path.display()
            )));
        }

        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            layer.remote_name()
        );
        info!("Fetching {} from {}", layer, url);
        fetch::download(&url, &path)?;
        Ok(path)
    }

    /// One-pass reader over the country records of `layer`
    pub fn countries(&self, layer: &Layer) -> Result<CountryReader> {
        let path = self.acquire(layer)?;
        let features = read_features(&path)?;
        info!("Read {} features from {}", features.len(), layer);
        Ok(CountryReader {
            features: features.into_iter(),
        })
    }

    /// All line work of `layer`, with polygon layers reduced to exteriors
    pub fn coastlines(&self, layer: &Layer) -> Result<Vec<LineString>> {
        let path = self.acquire(layer)?;
        let mut lines = Vec::new();
        for feature in read_features(&path)? {
            if let Some(ref geometry) = feature.geometry {
                process_geometry_lines(geometry, &mut |line| lines.push(line));
            }
        }
        info!("Read {} coastline segments from {}", lines.len(), layer);
        Ok(lines)
    }
}

/// Yields each country record once. Re-reading needs a fresh reader.
pub struct CountryReader {
    features: std::vec::IntoIter<Feature>,
}

impl Iterator for CountryReader {
    type Item = Result<CountryRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let feature = self.features.next()?;

            let Some(name) = feature_name(&feature) else {
                return Some(Err(Error::DatasetUnavailable(
                    "country feature without a name attribute".to_string(),
                )));
            };

            let polygons = feature
                .geometry
                .as_ref()
                .map(collect_polygons)
                .unwrap_or_default();
            if polygons.is_empty() {
                debug!("Skipping {} (no polygon geometry)", name);
                continue;
            }

            return Some(Ok(CountryRecord { name, polygons }));
        }
    }
}

fn feature_name(feature: &Feature) -> Option<String> {
    NAME_KEYS
        .iter()
        .find_map(|key| feature.property(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// Parse a GeoJSON file into its list of features
fn read_features(path: &Path) -> Result<Vec<Feature>> {
    let unavailable = |msg: String| Error::DatasetUnavailable(format!("{}: {}", path.display(), msg));

    let mut bytes = fs::read(path).map_err(|e| unavailable(e.to_string()))?;
    let geojson: GeoJson =
        simd_json::serde::from_slice(&mut bytes).map_err(|e| unavailable(e.to_string()))?;

    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc.features),
        GeoJson::Feature(f) => Ok(vec![f]),
        GeoJson::Geometry(geometry) => Ok(vec![Feature::from(geometry)]),
    }
}

fn to_line(coords: &[Vec<f64>]) -> LineString {
    coords
        .iter()
        .filter(|c| c.len() >= 2)
        .map(|c| (c[0], c[1]))
        .collect()
}

fn to_polygon(rings: &[Vec<Vec<f64>>]) -> Polygon {
    rings.iter().map(|ring| to_line(ring)).collect()
}

/// Polygons of a country geometry; line and point geometries contribute nothing
fn collect_polygons(geometry: &Geometry) -> Vec<Polygon> {
    match &geometry.value {
        Value::Polygon(rings) => vec![to_polygon(rings)],
        Value::MultiPolygon(polygons) => polygons.iter().map(|p| to_polygon(p)).collect(),
        Value::GeometryCollection(geometries) => {
            geometries.iter().flat_map(collect_polygons).collect()
        }
        _ => Vec::new(),
    }
}

fn process_geometry_lines<F>(geometry: &Geometry, add_line: &mut F)
where
    F: FnMut(LineString),
{
    match &geometry.value {
        Value::LineString(coords) => add_line(to_line(coords)),
        Value::MultiLineString(lines) => {
            for coords in lines {
                add_line(to_line(coords));
            }
        }
        Value::Polygon(rings) => {
            if let Some(exterior) = rings.first() {
                add_line(to_line(exterior));
            }
        }
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                if let Some(exterior) = rings.first() {
                    add_line(to_line(exterior));
                }
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                process_geometry_lines(g, add_line);
            }
        }
        _ => {}
    }
}
