//! Citation choropleth: reads `Country,Count` lines and draws a world map
//! with each country colored by its citation tier.

pub mod cli;
pub mod config;
pub mod counts;
pub mod data;
pub mod error;
pub mod map;
pub mod svg;
pub mod tier;

pub use config::{DatasetConfig, RenderConfig};
pub use counts::{load_counts, parse_counts, CountryCountTable};
pub use error::{Error, Result};
pub use map::{render_map, RenderReport};
pub use tier::ColorTier;

use cli::Args;

/// Load the counts named by `args` and render them. Nothing is drawn
/// if the input fails to parse.
pub fn run(args: &Args, config: &RenderConfig) -> Result<RenderReport> {
    let counts = load_counts(&args.input)?;
    render_map(&counts, &args.output, config)
}
