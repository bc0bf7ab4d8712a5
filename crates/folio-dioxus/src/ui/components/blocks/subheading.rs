use dioxus::prelude::*;

#[component]
pub fn Subheading(text: String, class: &'static str) -> Element {
    rsx! {
        h4 { class: "{class}", "{text}" }
    }
}
