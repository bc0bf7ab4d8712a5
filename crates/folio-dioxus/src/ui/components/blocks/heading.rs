use dioxus::prelude::*;

#[component]
pub fn Heading(level: u8, text: String, class: &'static str) -> Element {
    match level {
        0 | 1 => rsx! { h1 { class: "{class}", "{text}" } },
        2 => rsx! { h2 { class: "{class}", "{text}" } },
        _ => rsx! { h3 { class: "{class}", "{text}" } },
    }
}
