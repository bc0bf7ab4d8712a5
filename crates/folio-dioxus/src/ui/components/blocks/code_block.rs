use dioxus::prelude::*;

#[component]
pub fn CodeBlock(text: String, language: Option<String>, class: &'static str) -> Element {
    let code_class = language
        .as_ref()
        .map(|l| format!("language-{l}"))
        .unwrap_or_else(|| "language-text".to_string());

    rsx! {
        div {
            class: "{class}",
            pre {
                code {
                    class: "{code_class}",
                    "{text}"
                }
            }
        }
    }
}
