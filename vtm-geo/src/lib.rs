pub mod error;
pub mod feature;
pub mod filter;
pub mod loader;
pub mod marker;
pub mod path;
pub mod projection;
pub mod scale;
pub mod transform;
