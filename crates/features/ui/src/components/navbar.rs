use crate::routes::Route;
use dioxus::prelude::*;

/// Top navigation, the layout wrapping every route.
#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { to: Route::Home {}, active_class: "active", "Home" }
            Link { to: Route::About {}, active_class: "active", "About" }
            Link { to: Route::Login {}, active_class: "active", "Login" }
        }
        Outlet::<Route> {}
    }
}
