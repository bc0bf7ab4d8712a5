use dioxus::prelude::*;

#[component]
pub fn BlockQuote(text: String, class: &'static str) -> Element {
    rsx! {
        blockquote { class: "{class}", "{text}" }
    }
}
