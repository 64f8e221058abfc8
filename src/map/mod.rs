mod geometry;
mod projection;
mod renderer;

pub use projection::{robinson, Viewport};
pub use renderer::{render_map, MapRenderer, OutputFormat, RenderReport};
