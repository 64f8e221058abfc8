use glam::DVec2;

/// Robinson table: parallel length (X) and distance from the equator (Y)
/// at 5° steps from 0° to 90° latitude.
const ROBINSON_X: [f64; 19] = [
    1.0000, 0.9986, 0.9954, 0.9900, 0.9822, 0.9730, 0.9600, 0.9427, 0.9216, 0.8962, 0.8679,
    0.8350, 0.7986, 0.7597, 0.7186, 0.6732, 0.6213, 0.5722, 0.5322,
];
const ROBINSON_Y: [f64; 19] = [
    0.0000, 0.0620, 0.1240, 0.1860, 0.2480, 0.3100, 0.3720, 0.4340, 0.4958, 0.5571, 0.6176,
    0.6769, 0.7346, 0.7903, 0.8435, 0.8936, 0.9394, 0.9761, 1.0000,
];
const ROBINSON_FX: f64 = 0.8487;
const ROBINSON_FY: f64 = 1.3523;

/// Half extents of the unit-sphere Robinson world
pub const HALF_WIDTH: f64 = ROBINSON_FX * std::f64::consts::PI;
pub const HALF_HEIGHT: f64 = ROBINSON_FY;

/// Unit-sphere Robinson projection, y pointing north
pub fn robinson(lon: f64, lat: f64) -> DVec2 {
    let lat = lat.clamp(-90.0, 90.0);
    let pos = lat.abs() / 5.0;
    let i = (pos.floor() as usize).min(17);
    let t = pos - i as f64;

    let x = ROBINSON_X[i] + (ROBINSON_X[i + 1] - ROBINSON_X[i]) * t;
    let y = ROBINSON_Y[i] + (ROBINSON_Y[i + 1] - ROBINSON_Y[i]) * t;

    DVec2::new(
        ROBINSON_FX * x * lon.clamp(-180.0, 180.0).to_radians(),
        ROBINSON_FY * y * lat.signum(),
    )
}

/// Places the Robinson world inside a rectangle of the page
#[derive(Clone, Debug)]
pub struct Viewport {
    /// Page coordinates of the map center (lon 0, lat 0)
    pub center: DVec2,
    /// Page units per unit-sphere unit
    pub scale: f64,
}

impl Viewport {
    /// Largest viewport that fits the whole world in `origin..origin+size`
    pub fn fit(origin: DVec2, size: DVec2) -> Self {
        let scale = (size.x / (2.0 * HALF_WIDTH)).min(size.y / (2.0 * HALF_HEIGHT));
        Self {
            center: origin + size / 2.0,
            scale,
        }
    }

    /// Map width on the page
    pub fn map_width(&self) -> f64 {
        2.0 * HALF_WIDTH * self.scale
    }

    /// Project a geographic coordinate (lon, lat) to page coordinates
    pub fn project(&self, lon: f64, lat: f64) -> DVec2 {
        let p = robinson(lon, lat);
        // Page y grows downward
        self.center + DVec2::new(p.x, -p.y) * self.scale
    }

    /// Closed outline of the projected world (the map frame)
    pub fn outline(&self) -> Vec<DVec2> {
        let east = (-90..=90).map(|lat| self.project(180.0, lat as f64));
        let west = (-90..=90).rev().map(|lat| self.project(-180.0, lat as f64));
        east.chain(west).collect()
    }
}
