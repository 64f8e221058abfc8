use crate::config::RenderConfig;
use crate::counts::CountryCountTable;
use crate::data::{CountryRecord, LineString, NaturalEarth};
use crate::error::{Error, Result};
use crate::map::geometry::{line_path, polygon_path};
use crate::map::projection::{Viewport, HALF_HEIGHT, HALF_WIDTH};
use crate::svg::{Anchor, PathData, Style, SvgCanvas};
use crate::tier::ColorTier;
use glam::DVec2;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

const EDGE_COLOR: &str = "black";
const FRAME_COLOR: &str = "#333333";

/// Document formats the renderer can write, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Ok(OutputFormat::Svg),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// What a render did with each country
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderReport {
    /// Every drawn dataset country in dataset order; `None` = unmapped
    pub assignments: Vec<(String, Option<ColorTier>)>,
    /// Input names that matched no dataset country, sorted
    pub unmatched: Vec<String>,
}

impl RenderReport {
    /// `Some(tier)` for a drawn country, `None` if the dataset has no such name
    pub fn tier_of(&self, name: &str) -> Option<Option<ColorTier>> {
        self.assignments
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tier)| *tier)
    }

    pub fn mapped(&self) -> usize {
        self.assignments.iter().filter(|(_, t)| t.is_some()).count()
    }

    pub fn unmapped(&self) -> usize {
        self.assignments.len() - self.mapped()
    }
}

/// Render the citation choropleth for `counts` and write it to `output`
pub fn render_map(
    counts: &CountryCountTable,
    output: &Path,
    config: &RenderConfig,
) -> Result<RenderReport> {
    let OutputFormat::Svg = OutputFormat::from_path(output)?;

    let provider = NaturalEarth::new(&config.dataset);
    let countries = provider.countries(&config.dataset.countries)?;
    let coastlines = provider.coastlines(&config.dataset.coastlines)?;

    let mut renderer = MapRenderer::new(config);
    for record in countries {
        renderer.draw_country(&record?, counts);
    }
    renderer.draw_coastlines(&coastlines);
    renderer.draw_frame();
    renderer.draw_title();
    renderer.draw_legend();

    let report = renderer.save(counts, output)?;
    info!(
        "Wrote {:?}: {} countries colored, {} unmapped, {} input names unmatched",
        output,
        report.mapped(),
        report.unmapped(),
        report.unmatched.len()
    );
    Ok(report)
}

/// Draws one map onto an SVG canvas
pub struct MapRenderer<'a> {
    config: &'a RenderConfig,
    viewport: Viewport,
    canvas: SvgCanvas,
    assignments: Vec<(String, Option<ColorTier>)>,
}

impl<'a> MapRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        let top = config.margin + config.title_height;
        let origin = DVec2::new(config.margin, top);
        let size = DVec2::new(
            config.width - 2.0 * config.margin,
            config.height - top - config.margin,
        );

        Self {
            config,
            viewport: Viewport::fit(origin, size),
            canvas: SvgCanvas::new(config.width, config.height),
            assignments: Vec::new(),
        }
    }

    /// Fill a country with its tier color, or outline it if it has no count
    pub fn draw_country(&mut self, record: &CountryRecord, counts: &CountryCountTable) {
        let tier = counts.get(&record.name).map(ColorTier::from_count);
        match tier {
            Some(t) => debug!("{} -> {:?}", record.name, t),
            None => debug!("{} has no count, drawn unfilled", record.name),
        }

        let style = Style {
            fill: tier.map(ColorTier::color),
            stroke: Some(EDGE_COLOR),
            stroke_width: self.config.border_width,
        };
        let path = polygon_path(&record.polygons, &self.viewport);
        self.canvas.path(&path, &style, Some(&record.name));
        self.assignments.push((record.name.clone(), tier));
    }

    pub fn draw_coastlines(&mut self, lines: &[LineString]) {
        let style = Style {
            fill: None,
            stroke: Some(EDGE_COLOR),
            stroke_width: self.config.coastline_width,
        };
        for line in lines {
            let path = line_path(line, &self.viewport);
            self.canvas.path(&path, &style, None);
        }
    }

    /// Outline of the projected globe
    pub fn draw_frame(&mut self) {
        let mut path = PathData::new();
        let mut points = self.viewport.outline().into_iter();
        if let Some(first) = points.next() {
            path.move_to(first);
        }
        for p in points {
            path.line_to(p);
        }
        path.close();

        let style = Style {
            fill: None,
            stroke: Some(FRAME_COLOR),
            stroke_width: 1.0,
        };
        self.canvas.path(&path, &style, None);
    }

    pub fn draw_title(&mut self) {
        let at = DVec2::new(
            self.config.width / 2.0,
            self.config.margin + self.config.title_font_size,
        );
        self.canvas.text(
            at,
            &self.config.title,
            self.config.title_font_size,
            Anchor::Middle,
        );
    }

    /// Four-entry legend in the lower-left corner of the map area
    pub fn draw_legend(&mut self) {
        let font = self.config.legend_font_size;
        let pad = font * 0.5;
        let row = font * 1.5;
        let swatch = DVec2::new(font * 2.0, font * 0.7);
        let longest = ColorTier::ALL
            .iter()
            .map(|t| t.label().chars().count())
            .max()
            .unwrap_or(0);
        // Rough sans-serif advance width
        let text_width = longest as f64 * font * 0.6;

        let size = DVec2::new(
            pad * 3.0 + swatch.x + text_width,
            pad * 2.0 + row * ColorTier::ALL.len() as f64,
        );
        let map_left = self.viewport.center.x - HALF_WIDTH * self.viewport.scale;
        let map_bottom = self.viewport.center.y + HALF_HEIGHT * self.viewport.scale;
        let origin = DVec2::new(map_left + pad, map_bottom - pad - size.y);

        self.canvas.rect(
            origin,
            size,
            &Style {
                fill: Some("white"),
                stroke: Some("#cccccc"),
                stroke_width: 0.5,
            },
        );

        for (i, tier) in ColorTier::ALL.iter().enumerate() {
            let top = origin.y + pad + row * i as f64;
            let swatch_origin = DVec2::new(origin.x + pad, top + (row - swatch.y) / 2.0);
            self.canvas.rect(
                swatch_origin,
                swatch,
                &Style {
                    fill: Some(tier.color()),
                    stroke: None,
                    stroke_width: 0.0,
                },
            );
            let baseline = DVec2::new(
                swatch_origin.x + swatch.x + pad,
                top + (row + font * 0.7) / 2.0,
            );
            self.canvas.text(baseline, tier.label(), font, Anchor::Start);
        }
    }

    /// Write the map to `output`. The canvas is released either way.
    pub fn save(self, counts: &CountryCountTable, output: &Path) -> Result<RenderReport> {
        let drawn: HashSet<&str> = self.assignments.iter().map(|(n, _)| n.as_str()).collect();
        let mut unmatched: Vec<String> = counts
            .iter()
            .filter(|(name, _)| !drawn.contains(name))
            .map(|(name, count)| {
                warn!(
                    "Input country {:?} ({} citations) matches no dataset country",
                    name, count
                );
                name.to_string()
            })
            .collect();
        unmatched.sort();

        self.canvas.save(output)?;

        Ok(RenderReport {
            assignments: self.assignments,
            unmatched,
        })
    }
}
