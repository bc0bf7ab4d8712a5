use dioxus::prelude::*;
use folio_engine::{PortfolioItem, StyleTokens};

use super::PortfolioCard;

#[component]
pub fn Portfolio(items: Vec<PortfolioItem>, tokens: StyleTokens) -> Element {
    rsx! {
        section {
            class: "portfolio",
            h1 { class: "page-title {tokens.text}", "Portfolio" }
            if items.is_empty() {
                p { class: "{tokens.description_text}", "No projects to show yet." }
            } else {
                div {
                    class: "portfolio-grid",
                    for (index, item) in items.iter().enumerate() {
                        PortfolioCard { key: "{index}", item: item.clone(), index, tokens }
                    }
                }
            }
        }
    }
}
