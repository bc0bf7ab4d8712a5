use dioxus::prelude::*;

/// Paragraph text; inner line breaks are kept by the `white-space` rule of its class
#[component]
pub fn Paragraph(text: String, class: &'static str) -> Element {
    rsx! {
        p { class: "{class}", "{text}" }
    }
}
