use dioxus::prelude::*;
use folio_engine::{Post, StyleTokens};

#[component]
pub fn BlogPostHeader(post: Post, tokens: StyleTokens) -> Element {
    rsx! {
        header {
            class: "blog-post-header",
            if !post.image.is_empty() {
                div {
                    class: "blog-post-hero",
                    img { src: "{post.image}", alt: "{post.title}" }
                    div { class: "{tokens.image_overlay}" }
                }
            }
            div {
                class: "blog-post-tags",
                for tag in post.tags.iter() {
                    span { key: "{tag}", class: "{tokens.tag_chip}", "{tag}" }
                }
            }
            h1 { class: "blog-post-title {tokens.text}", "{post.title}" }
            if !post.description.is_empty() {
                p { class: "blog-post-description {tokens.description_text}", "{post.description}" }
            }
            div {
                class: "blog-post-meta {tokens.meta_text}",
                if !post.author.is_empty() {
                    span { class: "blog-post-author", "{post.author}" }
                }
                span { "{post.published_date}" }
                if !post.read_time.is_empty() {
                    span { "{post.read_time}" }
                }
            }
        }
    }
}
