//! Per-circle interaction rules.
//!
//! Each circle animates independently: hovering recolors it, clicking
//! pulses the radius, double-clicking flashes the fill cyan. CSS
//! transitions run the animations; this module only picks the target
//! values and the transition durations.

use dioxus::html::geometry::WheelDelta;
use vtm_geo::marker::TreeMarker;

/// Hover history of one circle. `Left` is distinct from `Pristine`
/// because leaving recolors a circle instead of restoring it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Pristine,
    Hovered,
    Left,
}

/// Double-click flash lifecycle. `Clearing` keeps the fast fill
/// transition while the flash fades back toward the hover fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlashPhase {
    #[default]
    None,
    Active,
    Clearing,
}

/// Live interaction state of one circle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircleActivity {
    pub hover: HoverPhase,
    pub pulsing: bool,
    pub flash: FlashPhase,
}

/// Target paint values for one circle render.
#[derive(Debug, Clone, PartialEq)]
pub struct CirclePaint {
    pub fill: &'static str,
    pub stroke_width: f64,
    pub radius: f64,
    pub transition: String,
}

/// Resolve the rendered attributes of one circle. An active flash wins
/// over the hover fill, the way an inline style overrides a
/// presentation attribute.
pub fn circle_paint(marker: &TreeMarker, activity: CircleActivity) -> CirclePaint {
    let fill = if activity.flash == FlashPhase::Active {
        "cyan"
    } else {
        match activity.hover {
            HoverPhase::Pristine => "none",
            HoverPhase::Hovered => "red",
            HoverPhase::Left => "yellowgreen",
        }
    };
    let stroke_width = match activity.hover {
        HoverPhase::Pristine => marker.bucket.stroke_width(),
        HoverPhase::Hovered => 2.0,
        HoverPhase::Left => 1.0,
    };
    let radius = if activity.pulsing {
        marker.radius * 1.5
    } else {
        marker.radius
    };
    let fill_ms = if activity.flash == FlashPhase::None {
        500
    } else {
        150
    };
    CirclePaint {
        fill,
        stroke_width,
        radius,
        transition: format!("fill {fill_ms}ms, stroke-width 500ms, r 150ms"),
    }
}

/// Paint order of the circles relative to the street band. A hovered
/// circle raises to the very top; on leave it lowers beneath the
/// streets, most recent first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawOrder {
    lowered: Vec<usize>,
    raised: Option<usize>,
}

impl DrawOrder {
    pub fn raise(&mut self, index: usize) {
        self.lowered.retain(|lowered| *lowered != index);
        self.raised = Some(index);
    }

    pub fn lower(&mut self, index: usize) {
        if self.raised == Some(index) {
            self.raised = None;
        }
        self.lowered.retain(|lowered| *lowered != index);
        self.lowered.insert(0, index);
    }

    /// Circle indices painted beneath the street paths.
    pub fn below_streets(&self) -> Vec<usize> {
        self.lowered.clone()
    }

    /// Circle indices painted above the street paths, the raised one last.
    pub fn above_streets(&self, count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..count)
            .filter(|index| !self.lowered.contains(index) && self.raised != Some(*index))
            .collect();
        if let Some(index) = self.raised {
            if index < count {
                order.push(index);
            }
        }
        order
    }
}

/// d3's wheel normalization: the zoom factor is `2^exponent`, with the
/// exponent scaled per delta unit.
pub fn wheel_exponent(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => -d.y * 0.002,
        WheelDelta::Lines(d) => -d.y * 0.05,
        WheelDelta::Pages(d) => -d.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtm_geo::scale::TrunkBucket;

    fn marker(radius: f64, bucket: TrunkBucket) -> TreeMarker {
        TreeMarker {
            x: 450.0,
            y: 425.0,
            radius,
            bucket,
            tree_id: "1581".to_string(),
            species: "Acer platanoides".to_string(),
            planting_year: "1985".to_string(),
        }
    }

    #[test]
    fn test_pristine_circles_use_the_bucket_styling() {
        let paint = circle_paint(&marker(6.0, TrunkBucket::Large), CircleActivity::default());
        assert_eq!(paint.fill, "none");
        assert_eq!(paint.stroke_width, 3.0);
        assert_eq!(paint.radius, 6.0);
        assert!(paint.transition.contains("fill 500ms"));
    }

    #[test]
    fn test_hover_recolors_and_thickens() {
        let activity = CircleActivity {
            hover: HoverPhase::Hovered,
            ..Default::default()
        };
        let paint = circle_paint(&marker(6.0, TrunkBucket::Small), activity);
        assert_eq!(paint.fill, "red");
        assert_eq!(paint.stroke_width, 2.0);
    }

    #[test]
    fn test_leaving_settles_on_yellowgreen() {
        let activity = CircleActivity {
            hover: HoverPhase::Left,
            ..Default::default()
        };
        let paint = circle_paint(&marker(6.0, TrunkBucket::VeryLarge), activity);
        assert_eq!(paint.fill, "yellowgreen");
        assert_eq!(paint.stroke_width, 1.0);
    }

    #[test]
    fn test_flash_overrides_the_hover_fill() {
        let activity = CircleActivity {
            hover: HoverPhase::Hovered,
            flash: FlashPhase::Active,
            ..Default::default()
        };
        let paint = circle_paint(&marker(6.0, TrunkBucket::Small), activity);
        assert_eq!(paint.fill, "cyan");
        // the stroke still follows the hover phase
        assert_eq!(paint.stroke_width, 2.0);
        assert!(paint.transition.contains("fill 150ms"));
    }

    #[test]
    fn test_flash_clearing_reverts_the_fill_at_flash_speed() {
        let activity = CircleActivity {
            hover: HoverPhase::Left,
            flash: FlashPhase::Clearing,
            ..Default::default()
        };
        let paint = circle_paint(&marker(6.0, TrunkBucket::Small), activity);
        assert_eq!(paint.fill, "yellowgreen");
        assert!(paint.transition.contains("fill 150ms"));
    }

    #[test]
    fn test_pulse_scales_the_radius_only() {
        let activity = CircleActivity {
            pulsing: true,
            ..Default::default()
        };
        let paint = circle_paint(&marker(6.0, TrunkBucket::Small), activity);
        assert_eq!(paint.radius, 9.0);
        assert_eq!(paint.fill, "none");
    }

    #[test]
    fn test_raise_paints_last() {
        let mut order = DrawOrder::default();
        order.raise(1);
        assert_eq!(order.below_streets(), Vec::<usize>::new());
        assert_eq!(order.above_streets(4), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_lower_paints_beneath_the_streets_newest_first() {
        let mut order = DrawOrder::default();
        order.lower(2);
        order.lower(0);
        assert_eq!(order.below_streets(), vec![0, 2]);
        assert_eq!(order.above_streets(4), vec![1, 3]);
    }

    #[test]
    fn test_raising_a_lowered_circle_unlowers_it() {
        let mut order = DrawOrder::default();
        order.lower(2);
        order.raise(2);
        assert_eq!(order.below_streets(), Vec::<usize>::new());
        assert_eq!(order.above_streets(3), vec![0, 1, 2]);
    }

    #[test]
    fn test_lowering_the_raised_circle_clears_the_raise() {
        let mut order = DrawOrder::default();
        order.raise(1);
        order.lower(1);
        assert_eq!(order.below_streets(), vec![1]);
        assert_eq!(order.above_streets(3), vec![0, 2]);
    }

    #[test]
    fn test_wheel_exponent_follows_the_delta_unit() {
        assert_eq!(wheel_exponent(WheelDelta::pixels(0.0, -500.0, 0.0)), 1.0);
        assert_eq!(wheel_exponent(WheelDelta::lines(0.0, -20.0, 0.0)), 1.0);
        assert_eq!(wheel_exponent(WheelDelta::pages(0.0, -1.0, 0.0)), 1.0);
        // scrolling down zooms out
        assert!(wheel_exponent(WheelDelta::pixels(0.0, 500.0, 0.0)) < 0.0);
    }
}
