use crate::data::{Category, Layer, Resolution};
use std::path::PathBuf;

/// Mirror of the Natural Earth vector data in GeoJSON form
pub const NATURAL_EARTH_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson";

/// Where Natural Earth layers come from and where they are cached
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Directory holding `ne_<resolution>_<name>.json` files
    pub cache_dir: PathBuf,
    /// Fetch missing layers from `base_url` into `cache_dir`
    pub download: bool,
    pub base_url: String,
    pub countries: Layer,
    pub coastlines: Layer,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("data"),
            download: true,
            base_url: NATURAL_EARTH_URL.to_string(),
            countries: Layer::new(Resolution::Low, Category::Cultural, "admin_0_countries"),
            coastlines: Layer::new(Resolution::Low, Category::Physical, "coastline"),
        }
    }
}

/// Page layout and styling for one rendered map
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Page width in SVG user units
    pub width: f64,
    /// Page height in SVG user units
    pub height: f64,
    /// Blank space around the map area
    pub margin: f64,
    /// Vertical space reserved above the map for the title
    pub title_height: f64,
    pub title: String,
    pub title_font_size: f64,
    pub legend_font_size: f64,
    pub border_width: f64,
    pub coastline_width: f64,
    pub dataset: DatasetConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            margin: 20.0,
            title_height: 36.0,
            title: "Geographic distribution of citations".to_string(),
            title_font_size: 16.0,
            legend_font_size: 8.0,
            border_width: 0.4,
            coastline_width: 0.8,
            dataset: DatasetConfig::default(),
        }
    }
}
