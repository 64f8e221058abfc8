use crate::error::{Error, Result};
use glam::DVec2;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

/// SVG path `d` attribute under construction
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: DVec2) {
        let _ = write!(self.d, "M{:.2},{:.2}", p.x, p.y);
    }

    pub fn line_to(&mut self, p: DVec2) {
        let _ = write!(self.d, "L{:.2},{:.2}", p.x, p.y);
    }

    pub fn close(&mut self) {
        self.d.push('Z');
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }
}

/// Fill and stroke of one drawn element. `fill: None` draws the outline only.
#[derive(Clone, Debug, PartialEq)]
pub struct Style<'a> {
    pub fill: Option<&'a str>,
    pub stroke: Option<&'a str>,
    pub stroke_width: f64,
}

impl Style<'_> {
    fn write_attrs(&self, out: &mut String) {
        let _ = write!(
            out,
            r#" fill="{}" stroke="{}" stroke-width="{}""#,
            self.fill.unwrap_or("none"),
            self.stroke.unwrap_or("none"),
            self.stroke_width
        );
    }
}

/// Horizontal anchor of a text element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}

/// In-memory SVG document. Elements are painted in the order they are added.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn path(&mut self, data: &PathData, style: &Style, title: Option<&str>) {
        if data.is_empty() {
            return;
        }
        let _ = write!(self.body, r#"<path d="{}""#, data.as_str());
        style.write_attrs(&mut self.body);
        // Holes in country polygons
        self.body.push_str(r#" fill-rule="evenodd""#);
        match title {
            Some(t) => {
                let _ = writeln!(self.body, "><title>{}</title></path>", escape(t));
            }
            None => self.body.push_str("/>\n"),
        }
    }

    pub fn rect(&mut self, origin: DVec2, size: DVec2, style: &Style) {
        let _ = write!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
            origin.x, origin.y, size.x, size.y
        );
        style.write_attrs(&mut self.body);
        self.body.push_str("/>\n");
    }

    /// Text with its baseline at `at`
    pub fn text(&mut self, at: DVec2, content: &str, font_size: f64, anchor: Anchor) {
        let anchor = match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        };
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" text-anchor="{}">{}</text>"#,
            at.x,
            at.y,
            font_size,
            anchor,
            escape(content)
        );
    }

    /// Complete SVG document text
    pub fn render(&self) -> String {
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                "\n",
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "\n",
                r#"<rect width="100%" height="100%" fill="white"/>"#,
                "\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    /// Write the document to `path` and release the canvas.
    /// The file appears only once fully written.
    pub fn save(self, path: &Path) -> Result<()> {
        let output_err = |source: std::io::Error| Error::OutputIo {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(output_err)?;
        tmp.write_all(self.render().as_bytes()).map_err(output_err)?;
        tmp.persist(path).map_err(|e| output_err(e.error))?;
        Ok(())
    }
}

/// Escape text for XML content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTLINE: Style = Style {
        fill: None,
        stroke: Some("black"),
        stroke_width: 0.5,
    };

    #[test]
    fn test_path_data() {
        let mut d = PathData::new();
        assert!(d.is_empty());
        d.move_to(DVec2::new(1.0, 2.0));
        d.line_to(DVec2::new(3.456, 4.0));
        d.close();
        assert_eq!(d.as_str(), "M1.00,2.00L3.46,4.00Z");
    }

    #[test]
    fn test_unfilled_path() {
        let mut canvas = SvgCanvas::new(10.0, 10.0);
        let mut d = PathData::new();
        d.move_to(DVec2::ZERO);
        d.line_to(DVec2::ONE);
        canvas.path(&d, &OUTLINE, None);
        canvas.path(&PathData::new(), &OUTLINE, None);

        let svg = canvas.render();
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains(r#"fill="none" stroke="black""#));
    }

    #[test]
    fn test_text_escaped() {
        let mut canvas = SvgCanvas::new(10.0, 10.0);
        canvas.text(DVec2::ZERO, "10 < Citations <= 50", 8.0, Anchor::Start);
        let svg = canvas.render();
        assert!(svg.contains("10 &lt; Citations &lt;= 50"));
        assert!(svg.contains(r#"font-size="8""#));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"Côte d'Ivoire & "x" <y>"#), "Côte d&apos;Ivoire &amp; &quot;x&quot; &lt;y&gt;");
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        SvgCanvas::new(20.0, 10.0).save(&path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 20 10""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_save_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("map.svg");
        let err = SvgCanvas::new(20.0, 10.0).save(&path).unwrap_err();
        assert!(matches!(err, Error::OutputIo { .. }));
        assert!(!path.exists());
    }
}
