use dioxus::prelude::*;
use folio_engine::{CardVariant, PortfolioItem, StyleTokens};

use super::Card;

/// One portfolio entry; falls back to its gradient when the photo is missing or fails to load
#[component]
pub fn PortfolioCard(item: PortfolioItem, index: usize, tokens: StyleTokens) -> Element {
    let mut image_failed = use_signal(|| false);
    let variant = CardVariant::for_index(index);
    let photo_url = item.photo.as_ref().map(|photo| photo.url.clone());
    let author = item.photo.as_ref().and_then(|photo| photo.author.clone());

    rsx! {
        Card {
            variant,
            class: "portfolio-card".to_string(),
            div {
                class: "portfolio-card-media {item.gradient}",
                {match photo_url {
                    Some(url) if !image_failed() => rsx! {
                        img {
                            src: "{url}",
                            alt: "{item.title}",
                            onerror: move |_| image_failed.set(true),
                        }
                    },
                    Some(_) => rsx! {
                        div { class: "portfolio-card-fallback", "Image unavailable" }
                    },
                    None => rsx! {},
                }}
            }
            span { class: "portfolio-card-kind {tokens.meta_text}", "{item.kind}" }
            h3 { class: "portfolio-card-title", "{item.title}" }
            p { class: "portfolio-card-desc {tokens.description_text}", "{item.desc}" }
            a {
                class: "portfolio-card-link",
                href: "{item.link}",
                target: "_blank",
                rel: "noopener noreferrer",
                "View project"
            }
            if let Some(author) = author {
                p {
                    class: "portfolio-card-credit {tokens.meta_text}",
                    "Photo by "
                    a {
                        href: "{author.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "@{author.username}",
                        "{author.name}"
                    }
                    " on Unsplash"
                }
            }
        }
    }
}
