use crate::data::{LineString, Polygon};
use crate::map::projection::Viewport;
use crate::svg::PathData;
use glam::DVec2;

/// Closed path for a country: every ring of every polygon.
/// Holes rely on the even-odd fill rule.
pub fn polygon_path(polygons: &[Polygon], viewport: &Viewport) -> PathData {
    let mut path = PathData::new();
    for ring in polygons.iter().flatten() {
        if ring.len() < 3 {
            continue;
        }
        let mut points = ring.iter().map(|&(lon, lat)| viewport.project(lon, lat));
        if let Some(first) = points.next() {
            path.move_to(first);
        }
        for p in points {
            path.line_to(p);
        }
        path.close();
    }
    path
}

/// Open path for a line, broken wherever a segment would jump
/// across the map (antimeridian crossings)
pub fn line_path(line: &LineString, viewport: &Viewport) -> PathData {
    let mut path = PathData::new();
    if line.len() < 2 {
        return path;
    }

    let max_jump = viewport.map_width() / 2.0;
    let mut prev: Option<DVec2> = None;

    for &(lon, lat) in line {
        let p = viewport.project(lon, lat);
        match prev {
            Some(q) if (p - q).length() < max_jump => path.line_to(p),
            _ => path.move_to(p),
        }
        prev = Some(p);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::fit(DVec2::ZERO, DVec2::new(800.0, 400.0))
    }

    #[test]
    fn test_polygon_rings_closed() {
        let square = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)];
        let hole = vec![(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 2.0)];
        let path = polygon_path(&[vec![square, hole]], &viewport());
        let d = path.as_str();
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
    }

    #[test]
    fn test_degenerate_ring_skipped() {
        let path = polygon_path(&[vec![vec![(0.0, 0.0), (1.0, 1.0)]]], &viewport());
        assert!(path.is_empty());
    }

    #[test]
    fn test_line_split_at_antimeridian() {
        let line = vec![(170.0, -40.0), (179.9, -41.0), (-179.9, -41.0), (-170.0, -40.0)];
        let d = line_path(&line, &viewport());
        assert_eq!(d.as_str().matches('M').count(), 2);
        assert_eq!(d.as_str().matches('L').count(), 2);
    }

    #[test]
    fn test_short_line() {
        assert!(line_path(&vec![(0.0, 0.0)], &viewport()).is_empty());
        let d = line_path(&vec![(0.0, 0.0), (1.0, 1.0)], &viewport());
        assert_eq!(d.as_str().matches('L').count(), 1);
    }
}
