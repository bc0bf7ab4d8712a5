use dioxus::prelude::*;
use folio_engine::{CardVariant, Post, RenderMode, StyleTokens};

use super::{AudioPlayer, BlogContent, BlogPostHeader, Card, ShareLinks};

/// Full post page: header, optional narration, formatted body and author card
#[component]
pub fn BlogPost(
    post: Post,
    default_mode: RenderMode,
    tokens: StyleTokens,
    share_url: String,
    on_back: EventHandler<()>,
) -> Element {
    // Formatting only reruns when the post or its mode changes
    let blocks = use_memo({
        let post = post.clone();
        use_reactive!(|(post, default_mode)| post.blocks(default_mode))
    });

    rsx! {
        div {
            class: "blog-post",
            button {
                class: "back-link",
                onclick: move |_| on_back.call(()),
                "← All posts"
            }
            BlogPostHeader { post: post.clone(), tokens }
            if let Some(audio) = post.audio.clone() {
                AudioPlayer { src: audio.src, title: audio.title, tokens }
            }
            BlogContent { blocks: blocks(), styles: tokens.blocks }
            if !post.author.is_empty() {
                Card {
                    variant: CardVariant::Muted,
                    class: "author-card".to_string(),
                    h3 { class: "author-card-heading", "About the Author" }
                    p { class: "author-card-name {tokens.text}", "{post.author}" }
                }
            }
            footer {
                class: "blog-post-footer",
                span { class: "{tokens.meta_text}", "Share this post" }
                ShareLinks {
                    url: share_url,
                    title: post.title.clone(),
                    button_class: tokens.share_button.to_string(),
                }
            }
        }
    }
}
