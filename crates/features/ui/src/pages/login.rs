use dioxus::prelude::*;

/// Placeholder sign-in page; there is no authentication behind it.
#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page login",
            h1 { "Login" }
            p { "Signing in is not available yet." }
        }
    }
}
