//! RSX components for the tree map app.

mod error_display;
mod legend;
mod loading_spinner;
mod map_controls;
mod map_view;
mod tooltip;

pub use error_display::ErrorDisplay;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use map_controls::MapControls;
pub use map_view::{MapView, MAP_HEIGHT, MAP_WIDTH};
pub use tooltip::TreeTooltip;
