/// SVG path strings for projected street geometry
use crate::feature::Geometry;
use crate::projection::Projection;

/// Builds the `d` attribute for a street feature. Each line becomes an
/// `M x,y L x,y ...` subpath; a multi-line geometry concatenates its
/// subpaths. Point geometry yields an empty string, since trees are
/// drawn as circles rather than paths.
pub fn line_path(geometry: &Geometry, projection: &Projection) -> String {
    match geometry {
        Geometry::Point { .. } => String::new(),
        Geometry::LineString { coordinates } => subpath(coordinates, projection),
        Geometry::MultiLineString { coordinates } => {
            let mut d = String::new();
            for line in coordinates {
                d.push_str(&subpath(line, projection));
            }
            d
        }
    }
}

fn subpath(line: &[[f64; 2]], projection: &Projection) -> String {
    let mut d = String::new();
    for (i, position) in line.iter().enumerate() {
        let (x, y) = projection.project(*position);
        let command = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{command}{x:.2},{y:.2}"));
    }
    d
}
