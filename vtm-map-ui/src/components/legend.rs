//! Static legend for the map encodings.

use dioxus::prelude::*;
use vtm_geo::scale::{year_legend_entries, TrunkBucket};

const LEGEND_WIDTH: f64 = 250.0;
const LEGEND_HEIGHT: f64 = 520.0;

/// Swatch circle radius and the vertical gap between swatch rows.
const SWATCH_RADIUS: f64 = 8.0;
const ROW_GAP: f64 = 10.0;

/// Labels sit one 30px gap past the swatch diameter.
const LABEL_X: f64 = 30.0 + SWATCH_RADIUS * 2.0;

const YEAR_ROWS_START_Y: f64 = 50.0;
const TRUNK_ROWS_START_Y: f64 = 250.0;

fn row_y(start: f64, row: usize) -> f64 {
    start + row as f64 * (SWATCH_RADIUS * 2.0 + ROW_GAP)
}

/// Data-independent key for the encodings: planting-year colors,
/// trunk-size strokes, and the street line style. Rendered once and
/// never updated.
#[component]
pub fn Legend() -> Element {
    let year_header_y = YEAR_ROWS_START_Y - 20.0;
    let trunk_header_y = TRUNK_ROWS_START_Y - 20.0;

    let year_rows: Vec<(f64, f64, String, &'static str)> = year_legend_entries()
        .into_iter()
        .enumerate()
        .map(|(row, (label, color))| {
            let cy = row_y(YEAR_ROWS_START_Y, row);
            (cy, cy + SWATCH_RADIUS, color, label)
        })
        .collect();

    let trunk_rows: Vec<(f64, f64, f64, &'static str)> = TrunkBucket::all()
        .into_iter()
        .enumerate()
        .map(|(row, bucket)| {
            let cy = row_y(TRUNK_ROWS_START_Y, row);
            (
                cy,
                cy + SWATCH_RADIUS,
                bucket.legend_stroke_width(),
                bucket.label(),
            )
        })
        .collect();

    rsx! {
        div {
            id: "legend",
            style: "position: absolute; top: 10px; left: 20px;",
            svg {
                width: "{LEGEND_WIDTH}",
                height: "{LEGEND_HEIGHT}",

                text {
                    x: "0",
                    y: "{year_header_y}",
                    font_size: "16px",
                    font_weight: "bold",
                    "Plant Year"
                }
                for (cy, label_y, color, label) in year_rows {
                    circle {
                        cx: "0",
                        cy: "{cy}",
                        r: "{SWATCH_RADIUS}",
                        stroke: "{color}",
                        fill: "{color}",
                        stroke_width: "2",
                    }
                    text {
                        x: "{LABEL_X}",
                        y: "{label_y}",
                        fill: "black",
                        font_size: "14px",
                        font_style: "italic",
                        style: "alignment-baseline: middle;",
                        "{label}"
                    }
                }

                text {
                    x: "0",
                    y: "{trunk_header_y}",
                    font_size: "16px",
                    font_weight: "bold",
                    "Trunk Size"
                }
                for (cy, label_y, swatch_width, label) in trunk_rows {
                    circle {
                        cx: "0",
                        cy: "{cy}",
                        r: "{SWATCH_RADIUS}",
                        stroke: "#999",
                        fill: "#fff",
                        stroke_width: "{swatch_width}",
                    }
                    text {
                        x: "{LABEL_X}",
                        y: "{label_y}",
                        fill: "black",
                        font_size: "14px",
                        font_style: "italic",
                        style: "alignment-baseline: middle;",
                        "{label}"
                    }
                }

                line {
                    x1: "10",
                    y1: "450",
                    x2: "100",
                    y2: "450",
                    stroke: "#333",
                    stroke_width: "4",
                    stroke_linecap: "round",
                }
                text {
                    x: "110",
                    y: "450",
                    fill: "black",
                    font_size: "14px",
                    font_family: "Arial, sans-serif",
                    "Street"
                }
            }
        }
    }
}
