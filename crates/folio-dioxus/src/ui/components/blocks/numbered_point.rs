use dioxus::prelude::*;

#[component]
pub fn NumberedPoint(
    label: String,
    text: String,
    label_class: &'static str,
    text_class: &'static str,
) -> Element {
    rsx! {
        div {
            class: "numbered-point",
            h3 { class: "{label_class}", "{label}" }
            if !text.is_empty() {
                p { class: "{text_class}", "{text}" }
            }
        }
    }
}
