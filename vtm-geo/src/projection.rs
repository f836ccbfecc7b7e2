/// Conic equal-area (Albers) projection with d3-geo semantics
use crate::feature::FeatureCollection;
use std::f64::consts::{PI, TAU};

/// Forward-only map projection: spherical `[lon, lat]` degrees in, screen
/// pixels out. The screen transform keeps the configured center at the
/// configured translate, with y growing downward.
#[derive(Debug, Clone)]
pub struct Projection {
    // conic equal-area constants derived from the standard parallels
    n: f64,
    c: f64,
    r0: f64,
    rotate_lambda: f64,
    center: [f64; 2],
    k: f64,
    translate: [f64; 2],
    dx: f64,
    dy: f64,
}

impl Projection {
    /// A conic equal-area projection with the given center (degrees),
    /// longitude rotation (degrees), standard parallels (degrees), scale,
    /// and translate.
    pub fn conic_equal_area(
        center: [f64; 2],
        rotate_lon: f64,
        parallels: [f64; 2],
        scale: f64,
        translate: [f64; 2],
    ) -> Self {
        let sy0 = parallels[0].to_radians().sin();
        let n = (sy0 + parallels[1].to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;
        let mut projection = Self {
            n,
            c,
            r0,
            rotate_lambda: rotate_lon.to_radians(),
            center: [center[0].to_radians(), center[1].to_radians()],
            k: scale,
            translate,
            dx: 0.0,
            dy: 0.0,
        };
        projection.recenter();
        projection
    }

    /// The fixed projection for the old-town map: centered on Vienna,
    /// rotated east for Austria's position, parallels at 45 and 55 degrees.
    pub fn vienna_old_town(width: f64, height: f64) -> Self {
        Self::conic_equal_area(
            [16.3738, 48.2082],
            4.5,
            [45.0, 55.0],
            100_000.0,
            [width / 2.0, height / 2.0],
        )
    }

    /// Unit-sphere forward projection, before rotation, scale, and
    /// translate are applied.
    fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let r = (self.c - 2.0 * self.n * phi.sin()).sqrt() / self.n;
        let a = lambda * self.n;
        (r * a.sin(), self.r0 - r * a.cos())
    }

    // The configured center projects without rotation (d3 convention),
    // and the offsets pin it to the translate point.
    fn recenter(&mut self) {
        let (cx, cy) = self.raw(self.center[0], self.center[1]);
        self.dx = self.translate[0] - self.k * cx;
        self.dy = self.translate[1] + self.k * cy;
    }

    /// Projects a `[lon, lat]` position in degrees to screen coordinates.
    pub fn project(&self, position: [f64; 2]) -> (f64, f64) {
        let mut lambda = position[0].to_radians() + self.rotate_lambda;
        if lambda > PI {
            lambda -= TAU;
        } else if lambda < -PI {
            lambda += TAU;
        }
        let (x, y) = self.raw(lambda, position[1].to_radians());
        (self.dx + self.k * x, self.dy - self.k * y)
    }

    /// Rescales and re-translates so the collection's projected bounding
    /// box fits a `width` x `height` viewport, centered, preserving aspect
    /// ratio (the d3 `fitSize` algorithm: measure at scale 150 / translate
    /// zero, then solve for the final scale and translate).
    pub fn fit_size(&mut self, width: f64, height: f64, collection: &FeatureCollection) {
        self.k = 150.0;
        self.translate = [0.0, 0.0];
        self.recenter();

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for feature in &collection.features {
            for position in feature.geometry.positions() {
                let (x, y) = self.project(position);
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        let k = (width / (max_x - min_x)).min(height / (max_y - min_y));
        if !k.is_finite() || k <= 0.0 {
            return;
        }
        self.k = 150.0 * k;
        self.translate = [
            (width - k * (max_x + min_x)) / 2.0,
            (height - k * (max_y + min_y)) / 2.0,
        ];
        self.recenter();
    }
}
