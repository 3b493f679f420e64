use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page about",
            h1 { "About" }
            p { "A small client that maps locations to pages." }
        }
    }
}
