use dioxus::prelude::*;
use tracing::debug;

/// Unmatched locations render nothing below the navigation bar.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "No page for location");
    rsx! {}
}
