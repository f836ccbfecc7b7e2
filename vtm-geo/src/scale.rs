/// Visual encoding scales for the tree layer
use crate::feature::FeatureCollection;

/// Largest circle radius in pixels.
pub const RADIUS_MAX: f64 = 15.0;

/// Square-root scale from trunk circumference to circle radius, domain
/// `[min, max]` of the collection, range `[0, RADIUS_MAX]`.
///
/// The domain is taken from the whole collection, before the working-set
/// filter runs, so trees that never get drawn still influence sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrunkRadiusScale {
    sqrt_min: f64,
    sqrt_max: f64,
}

impl TrunkRadiusScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            sqrt_min: sqrt_signed(min),
            sqrt_max: sqrt_signed(max),
        }
    }

    pub fn from_collection(collection: &FeatureCollection) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for feature in &collection.features {
            if let Some(size) = feature.trunk_size() {
                min = min.min(size);
                max = max.max(size);
            }
        }
        if min > max {
            return Self::new(0.0, 0.0);
        }
        Self::new(min, max)
    }

    /// Domain endpoints pass through the square root, then interpolate
    /// linearly into the radius range. A zero-width domain maps every
    /// input to the middle of the range.
    pub fn radius(&self, trunk_size: f64) -> f64 {
        let span = self.sqrt_max - self.sqrt_min;
        let t = if span == 0.0 {
            0.5
        } else {
            (sqrt_signed(trunk_size) - self.sqrt_min) / span
        };
        RADIUS_MAX * t
    }
}

fn sqrt_signed(value: f64) -> f64 {
    if value < 0.0 {
        -(-value).sqrt()
    } else {
        value.sqrt()
    }
}

const YEAR_STOPS: [(f64, [u8; 3]); 4] = [
    (0.0, [0xff, 0xff, 0xcc]),
    (1800.0, [0xc2, 0xe6, 0x99]),
    (1900.0, [0x78, 0xc6, 0x79]),
    (2021.0, [0x23, 0x84, 0x43]),
];

/// Piecewise-linear RGB ramp over the planting-year stops, clamped at
/// the domain ends. Light yellow for the oldest plantings, dark green
/// for the newest.
pub fn year_color(year: f64) -> String {
    let (first_year, first_color) = YEAR_STOPS[0];
    if year <= first_year {
        return hex(first_color);
    }
    for window in YEAR_STOPS.windows(2) {
        let (y0, c0) = window[0];
        let (y1, c1) = window[1];
        if year <= y1 {
            let t = (year - y0) / (y1 - y0);
            return hex([
                lerp_channel(c0[0], c1[0], t),
                lerp_channel(c0[1], c1[1], t),
                lerp_channel(c0[2], c1[2], t),
            ]);
        }
    }
    let (_, last_color) = YEAR_STOPS[YEAR_STOPS.len() - 1];
    hex(last_color)
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Legend entries for the planting-year encoding: label and swatch color.
pub fn year_legend_entries() -> [(&'static str, String); 4] {
    [
        ("Pre-1800", year_color(0.0)),
        ("1800 - 1900", year_color(1800.0)),
        ("1900 - 2021", year_color(1900.0)),
        ("Post-2021", year_color(2021.0)),
    ]
}

/// Threshold buckets for trunk circumference, driving circle stroke
/// styling and the trunk-size legend. Boundary values land in the lower
/// bucket: 50 cm is still `Small`, 300 cm is still `Large`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrunkBucket {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl TrunkBucket {
    pub fn for_size(trunk_size: f64) -> Self {
        if trunk_size <= 50.0 {
            TrunkBucket::Small
        } else if trunk_size <= 150.0 {
            TrunkBucket::Medium
        } else if trunk_size <= 300.0 {
            TrunkBucket::Large
        } else {
            TrunkBucket::VeryLarge
        }
    }

    pub fn stroke_color(self) -> &'static str {
        match self {
            TrunkBucket::Small => "#ffffcc",
            TrunkBucket::Medium => "#c2e699",
            TrunkBucket::Large => "#78c679",
            TrunkBucket::VeryLarge => "#238443",
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            TrunkBucket::Small => 1.0,
            TrunkBucket::Medium => 2.0,
            TrunkBucket::Large => 3.0,
            TrunkBucket::VeryLarge => 4.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrunkBucket::Small => "Small (\u{2264} 50 cm)",
            TrunkBucket::Medium => "Medium (51 - 150 cm)",
            TrunkBucket::Large => "Large (151 - 300 cm)",
            TrunkBucket::VeryLarge => "Very Large (> 300 cm)",
        }
    }

    /// Swatch stroke width in the legend, heavier than the map strokes so
    /// the steps read at a glance.
    pub fn legend_stroke_width(self) -> f64 {
        match self {
            TrunkBucket::Small => 2.0,
            TrunkBucket::Medium => 4.0,
            TrunkBucket::Large => 6.0,
            TrunkBucket::VeryLarge => 8.0,
        }
    }

    /// Buckets in legend display order.
    pub fn all() -> [TrunkBucket; 4] {
        [
            TrunkBucket::Small,
            TrunkBucket::Medium,
            TrunkBucket::Large,
            TrunkBucket::VeryLarge,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_hits_the_range_ends() {
        let scale = TrunkRadiusScale::new(50.0, 400.0);
        assert!(scale.radius(50.0).abs() < 1e-12);
        assert!((scale.radius(400.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_radius_is_monotonic() {
        let scale = TrunkRadiusScale::new(10.0, 500.0);
        let mut last = f64::NEG_INFINITY;
        for size in [10.0, 50.0, 100.0, 250.0, 499.0, 500.0] {
            let r = scale.radius(size);
            assert!(r >= last);
            last = r;
        }
    }

    #[test]
    fn test_radius_interpolates_in_sqrt_space() {
        let scale = TrunkRadiusScale::new(0.0, 400.0);
        // sqrt(100) is exactly half of sqrt(400)
        assert!((scale.radius(100.0) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_domain_maps_to_range_middle() {
        let scale = TrunkRadiusScale::new(120.0, 120.0);
        assert!((scale.radius(120.0) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_domain_comes_from_unfiltered_collection() {
        let collection: FeatureCollection = serde_json::from_str(
            r#"{ "features": [
                { "geometry": { "type": "Point", "coordinates": [16.37, 48.21] },
                  "properties": { "TrunkSize": 20, "PlantingYear": 1800 } },
                { "geometry": { "type": "Point", "coordinates": [16.38, 48.21] },
                  "properties": { "TrunkSize": 180, "PlantingYear": 1995 } }
            ]}"#,
        )
        .unwrap();
        // the 1800 tree is outside the working set but still sets the minimum
        let scale = TrunkRadiusScale::from_collection(&collection);
        assert!(scale.radius(20.0).abs() < 1e-12);
        assert!((scale.radius(180.0) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_year_color_at_the_stops() {
        assert_eq!(year_color(0.0), "#ffffcc");
        assert_eq!(year_color(1800.0), "#c2e699");
        assert_eq!(year_color(1900.0), "#78c679");
        assert_eq!(year_color(2021.0), "#238443");
    }

    #[test]
    fn test_year_color_interpolates_between_stops() {
        // a quarter of the way from the first stop to the second
        assert_eq!(year_color(450.0), "#f0f9bf");
    }

    #[test]
    fn test_year_color_clamps_outside_the_domain() {
        assert_eq!(year_color(-50.0), "#ffffcc");
        assert_eq!(year_color(2400.0), "#238443");
    }

    #[test]
    fn test_bucket_boundaries_fall_in_the_lower_bucket() {
        assert_eq!(TrunkBucket::for_size(50.0), TrunkBucket::Small);
        assert_eq!(TrunkBucket::for_size(51.0), TrunkBucket::Medium);
        assert_eq!(TrunkBucket::for_size(150.0), TrunkBucket::Medium);
        assert_eq!(TrunkBucket::for_size(300.0), TrunkBucket::Large);
        assert_eq!(TrunkBucket::for_size(300.1), TrunkBucket::VeryLarge);
    }

    #[test]
    fn test_bucket_styling() {
        assert_eq!(TrunkBucket::for_size(40.0).stroke_color(), "#ffffcc");
        assert_eq!(TrunkBucket::for_size(40.0).stroke_width(), 1.0);
        assert_eq!(TrunkBucket::for_size(400.0).stroke_color(), "#238443");
        assert_eq!(TrunkBucket::for_size(400.0).stroke_width(), 4.0);
        assert_eq!(TrunkBucket::Small.legend_stroke_width(), 2.0);
        assert_eq!(TrunkBucket::VeryLarge.legend_stroke_width(), 8.0);
    }
}
