use crate::routes::Route;
use dioxus::prelude::*;

/// Root component handed to the launcher.
#[component]
pub fn App() -> Element {
    rsx! { Router::<Route> {} }
}
