//! One component per formatted block kind, plus [`BlockView`] to pick between them.

mod block_quote;
mod code_block;
mod heading;
mod list_block;
mod numbered_point;
mod paragraph;
mod section_break;
mod subheading;

pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use heading::Heading;
pub use list_block::ListBlock;
pub use numbered_point::NumberedPoint;
pub use paragraph::Paragraph;
pub use section_break::SectionBreak;
pub use subheading::Subheading;

use dioxus::prelude::*;
use folio_engine::{Block, theme::BlockStyles};

#[component]
pub fn BlockView(block: Block, styles: BlockStyles) -> Element {
    match block {
        Block::Heading { level, text } => rsx! {
            Heading { level, text, class: styles.heading(level) }
        },
        Block::Paragraph { text } => rsx! {
            Paragraph { text, class: styles.paragraph }
        },
        Block::List { items } => rsx! {
            ListBlock { items, class: styles.list, item_class: styles.list_item }
        },
        Block::NumberedPoint { label, text } => rsx! {
            NumberedPoint {
                label,
                text,
                label_class: styles.numbered_label,
                text_class: styles.numbered_text,
            }
        },
        Block::CodeBlock { text, language } => rsx! {
            CodeBlock { text, language, class: styles.code }
        },
        Block::Quote { text } => rsx! {
            BlockQuote { text, class: styles.quote }
        },
        Block::SectionBreak { title, index } => rsx! {
            SectionBreak { title, index, class: styles.section_break }
        },
        Block::Subheading { text } => rsx! {
            Subheading { text, class: styles.subheading }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_engine::Theme;
    use rstest::rstest;

    fn render_block(block: Block) -> String {
        let mut dom = VirtualDom::new_with_props(
            BlockView,
            BlockViewProps {
                block,
                styles: Theme::Dark.tokens().blocks,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[rstest]
    #[case(Block::Heading { level: 1, text: "Title".into() }, "<h1")]
    #[case(Block::Heading { level: 2, text: "Part".into() }, "<h2")]
    #[case(Block::Heading { level: 3, text: "Detail".into() }, "<h3")]
    #[case(Block::Paragraph { text: "Words".into() }, "<p")]
    #[case(Block::List { items: vec!["a".into()] }, "<ul")]
    #[case(Block::CodeBlock { text: "ls".into(), language: None }, "<pre")]
    #[case(Block::Quote { text: "wise".into() }, "<blockquote")]
    #[case(Block::Subheading { text: "Aside".into() }, "<h4")]
    fn test_block_renders_expected_element(#[case] block: Block, #[case] tag: &str) {
        let html = render_block(block);
        assert!(html.contains(tag), "{tag} missing from {html}");
    }

    #[test]
    fn test_list_renders_each_item() {
        let html = render_block(Block::List {
            items: vec!["first".into(), "second".into()],
        });
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("first"));
        assert!(html.contains("second"));
    }

    #[test]
    fn test_numbered_point_renders_label_and_text() {
        let html = render_block(Block::NumberedPoint {
            label: "1. Start".into(),
            text: "Then continue".into(),
        });
        assert!(html.contains("block-numbered-label"));
        assert!(html.contains("1. Start"));
        assert!(html.contains("Then continue"));
    }

    #[test]
    fn test_code_block_carries_language_class() {
        let html = render_block(Block::CodeBlock {
            text: "fn main() {}".into(),
            language: Some("rust".into()),
        });
        assert!(html.contains("language-rust"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_section_break_shows_number_and_title() {
        let html = render_block(Block::SectionBreak {
            title: "Chapter 1: Roots".into(),
            index: 0,
        });
        assert!(html.contains("Chapter 1: Roots"));
        assert!(html.contains("section-1"));
    }

    #[test]
    fn test_paragraph_text_is_escaped() {
        let html = render_block(Block::Paragraph {
            text: "<script>alert(1)</script>".into(),
        });
        assert!(!html.contains("<script>"));
    }
}
