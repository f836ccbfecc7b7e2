//! Dioxus components and interaction state for the Vienna tree map.
//!
//! This crate provides:
//! - `state`: Reactive MapState with Dioxus Signals
//! - `interaction`: Per-circle hover/pulse/flash rules and paint order
//! - `components`: RSX components (map view, legend, tooltip, controls)

pub mod components;
pub mod interaction;
pub mod state;
