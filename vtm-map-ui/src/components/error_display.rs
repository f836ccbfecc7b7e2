//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a dataset failure message in a styled banner.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 6px 0; background: #FDECEA; color: #B71C1C; border-radius: 4px; border: 1px solid #F5C6CB;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
