use dioxus::prelude::*;

/// Visual divider opening a section; `index` is zero-based
#[component]
pub fn SectionBreak(title: String, index: usize, class: &'static str) -> Element {
    let number = index + 1;

    rsx! {
        div {
            class: "{class}",
            id: "section-{number}",
            span { class: "section-number", "{number:02}" }
            h2 { class: "section-title", "{title}" }
        }
    }
}
