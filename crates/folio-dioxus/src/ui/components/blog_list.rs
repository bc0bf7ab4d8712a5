use dioxus::prelude::*;
use folio_engine::{PostCollection, StyleTokens};

use super::BlogCard;

#[component]
pub fn BlogList(
    posts: PostCollection,
    tokens: StyleTokens,
    base_url: String,
    on_open: EventHandler<String>,
) -> Element {
    rsx! {
        section {
            class: "blog-list",
            h1 { class: "page-title {tokens.text}", "Blog" }
            if posts.is_empty() {
                p { class: "{tokens.description_text}", "No posts published yet." }
            } else {
                div {
                    class: "blog-grid",
                    for (index, post) in posts.iter().enumerate() {
                        BlogCard {
                            key: "{post.slug}",
                            post: post.clone(),
                            index,
                            tokens,
                            share_url: post.share_url(&base_url),
                            on_open,
                        }
                    }
                }
            }
        }
    }
}
