use dioxus::prelude::*;
use folio_engine::{CardVariant, Post, StyleTokens};

use super::{Card, ShareLinks};

/// Number of tags shown on a card's image.
const CARD_TAGS: usize = 2;

#[component]
pub fn BlogCard(
    post: Post,
    index: usize,
    tokens: StyleTokens,
    share_url: String,
    on_open: EventHandler<String>,
) -> Element {
    let variant = CardVariant::for_index(index);
    let slug = post.slug.clone();

    rsx! {
        Card {
            variant,
            class: "blog-card".to_string(),
            article {
                class: "blog-card-body",
                div {
                    class: "blog-card-link",
                    role: "link",
                    tabindex: "0",
                    onclick: move |_| on_open.call(slug.clone()),
                    div {
                        class: "blog-card-image",
                        img { src: "{post.image}", alt: "{post.title}" }
                        div { class: "{tokens.image_overlay}" }
                        div {
                            class: "blog-card-tags",
                            for tag in post.tags.iter().take(CARD_TAGS) {
                                span { key: "{tag}", class: "{tokens.tag_chip}", "{tag}" }
                            }
                        }
                    }
                    h3 { class: "blog-card-title", "{post.title}" }
                    p {
                        class: "blog-card-meta {tokens.meta_text}",
                        span { "{post.published_date}" }
                        span { "•" }
                        span { "{post.read_time}" }
                    }
                    p { class: "blog-card-description {tokens.description_text}", "{post.description}" }
                    div { class: "blog-card-more", "Read more" }
                }
                div {
                    class: "blog-card-share",
                    ShareLinks {
                        url: share_url,
                        title: post.title.clone(),
                        button_class: tokens.share_button.to_string(),
                    }
                }
            }
        }
    }
}
