use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page home",
            h1 { "Home" }
            p { "Welcome! Use the navigation above to look around." }
        }
    }
}
