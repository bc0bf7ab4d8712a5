use dioxus::prelude::*;

#[component]
pub fn ListBlock(items: Vec<String>, class: &'static str, item_class: &'static str) -> Element {
    rsx! {
        ul {
            class: "{class}",
            for (index, item) in items.iter().enumerate() {
                li { key: "{index}", class: "{item_class}", "{item}" }
            }
        }
    }
}
