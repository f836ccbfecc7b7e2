//! Map state managed via Dioxus context.
//!
//! `MapState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Components retrieve it with `use_context::<MapState>()`.

use dioxus::prelude::*;
use vtm_geo::marker::TreeMarker;
use vtm_geo::transform::ZoomTransform;

use crate::interaction::{CircleActivity, DrawOrder};

/// Content and placement of the hover tooltip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipModel {
    pub visible: bool,
    /// Opacity fade duration: slow on show, near-instant on hide
    pub fade_ms: u32,
    /// Document coordinates, offset from the pointer
    pub page_x: f64,
    pub page_y: f64,
    pub tree_id: String,
    pub species: String,
    pub planting_year: String,
}

/// Shared state for the tree map app.
#[derive(Clone, Copy)]
pub struct MapState {
    /// Whether the street phase is still in flight
    pub loading: Signal<bool>,
    /// Street dataset failure message, if any
    pub street_error: Signal<Option<String>>,
    /// Tree dataset failure message, if any
    pub tree_error: Signal<Option<String>>,
    /// Projected street outlines as SVG path data
    pub street_paths: Signal<Vec<String>>,
    /// Projected tree circles
    pub markers: Signal<Vec<TreeMarker>>,
    /// Per-circle interaction state, indexed like `markers`
    pub activity: Signal<Vec<CircleActivity>>,
    /// Paint order of the circles around the street band
    pub draw_order: Signal<DrawOrder>,
    /// Tooltip for the hovered tree
    pub tooltip: Signal<TooltipModel>,
    /// Zoom/pan transform applied to the map group
    pub transform: Signal<ZoomTransform>,
    /// CSS transition length for programmatic zoom moves (0 = instant)
    pub zoom_animation_ms: Signal<u32>,
    /// Whether the pointer moved past the drag threshold since mousedown
    pub did_pan: Signal<bool>,
}

impl MapState {
    /// Create a new MapState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            street_error: Signal::new(None),
            tree_error: Signal::new(None),
            street_paths: Signal::new(Vec::new()),
            markers: Signal::new(Vec::new()),
            activity: Signal::new(Vec::new()),
            draw_order: Signal::new(DrawOrder::default()),
            tooltip: Signal::new(TooltipModel::default()),
            transform: Signal::new(ZoomTransform::IDENTITY),
            zoom_animation_ms: Signal::new(0),
            did_pan: Signal::new(false),
        }
    }

    /// Install freshly loaded markers, resetting the per-circle
    /// interaction state and the paint order with them.
    pub fn set_markers(&mut self, markers: Vec<TreeMarker>) {
        self.activity
            .set(vec![CircleActivity::default(); markers.len()]);
        self.draw_order.set(DrawOrder::default());
        self.markers.set(markers);
    }
}
