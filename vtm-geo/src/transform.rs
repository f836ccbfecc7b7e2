/// Zoom and pan state for the map group
///
/// Screen position of a content point `p` under a transform is
/// `p * k + (x, y)`, matching the CSS `translate(..) scale(..)` string
/// the view applies with a `0 0` transform origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 8.0;

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Scales by `factor`, clamped to `[MIN_SCALE, MAX_SCALE]`, keeping
    /// the content under `(cx, cy)` fixed on screen.
    pub fn scaled_about(self, factor: f64, cx: f64, cy: f64) -> ZoomTransform {
        let k = (self.k * factor).clamp(MIN_SCALE, MAX_SCALE);
        let content_x = (cx - self.x) / self.k;
        let content_y = (cy - self.y) / self.k;
        ZoomTransform {
            k,
            x: cx - content_x * k,
            y: cy - content_y * k,
        }
    }

    /// Same scale, new translate. Dragging pans by offsetting the
    /// translate captured at drag start.
    pub fn translated_to(self, x: f64, y: f64) -> ZoomTransform {
        ZoomTransform { k: self.k, x, y }
    }

    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        ZoomTransform::IDENTITY
    }
}
