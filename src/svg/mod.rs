mod canvas;

pub use canvas::{escape, Anchor, PathData, Style, SvgCanvas};
