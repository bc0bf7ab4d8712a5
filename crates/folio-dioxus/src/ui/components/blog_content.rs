use dioxus::prelude::*;
use folio_engine::{Block, theme::BlockStyles};

use super::{blocks::BlockView, reading_progress::ReadingProgress};

/// Renders a post's formatted blocks in document order, under a reading progress bar
#[component]
pub fn BlogContent(blocks: Vec<Block>, styles: BlockStyles) -> Element {
    if blocks.is_empty() {
        return rsx! {
            div { class: "blog-content empty", "This post has no content yet." }
        };
    }

    rsx! {
        article {
            class: "blog-content",
            for (index, block) in blocks.iter().enumerate() {
                BlockView { key: "{index}", block: block.clone(), styles }
            }
            ReadingProgress {}
        }
    }
}
