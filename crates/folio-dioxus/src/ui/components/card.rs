use dioxus::prelude::*;
use folio_engine::CardVariant;

#[component]
pub fn Card(variant: CardVariant, class: Option<String>, children: Element) -> Element {
    let extra = class.unwrap_or_default();
    let glow = variant.glow_class();

    rsx! {
        div {
            class: "card {glow} {extra}",
            {children}
        }
    }
}
