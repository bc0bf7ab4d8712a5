//! Tests for the formatting module.
//!
//! Fixture posts live in `fixtures/`; their expected output is kept inline as
//! debug snapshots so a diff shows exactly which block changed.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{Block, RenderMode, format, format_flat};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!(
        "{}/src/formatting/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

#[test]
fn fixture_flat_post() {
    let blocks = format(&fixture("flat_post"), RenderMode::Flat);
    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Paragraph {
            text: "Design leadership is mostly about listening.",
        },
        Heading {
            level: 2,
            text: "Why teams stall",
        },
        Paragraph {
            text: "Teams rarely stall for lack of ideas.",
        },
        Heading {
            level: 3,
            text: "Common causes",
        },
        List {
            items: [
                "Unclear ownership",
                "Too many priorities",
                "No feedback loop",
            ],
        },
        NumberedPoint {
            label: "1. Start small",
            text: "Pick one workflow and fix it end to end.",
        },
        CodeBlock {
            text: "npm run build\n\nnpm run deploy",
            language: Some(
                "bash",
            ),
        },
        Quote {
            text: "Good design is as little design as possible.",
        },
    ]
    "#);
}

#[test]
fn fixture_sectioned_story() {
    let blocks = format(&fixture("sectioned_story"), RenderMode::Sectioned);
    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Heading {
            level: 1,
            text: "The Long Road",
        },
        Quote {
            text: "Every journey begins with a single step.",
        },
        Paragraph {
            text: "I started designing products a decade ago.\n\nIt was not a straight line.",
        },
        SectionBreak {
            title: "Chapter 1: Early Days",
            index: 0,
        },
        Subheading {
            text: "First Lessons",
        },
        Paragraph {
            text: "I learned that nobody reads the manual.",
        },
        SectionBreak {
            title: "Finding a Team",
            index: 1,
        },
        Paragraph {
            text: "Collaboration beats talent when talent does not collaborate.",
        },
    ]
    "#);
}

#[rstest]
#[case(RenderMode::Flat)]
#[case(RenderMode::Sectioned)]
fn empty_content_has_no_blocks(#[case] mode: RenderMode) {
    assert!(format("", mode).is_empty());
    assert!(format("\n\n   \n", mode).is_empty());
}

#[rstest]
#[case("## Title\n\nBody text", vec![
    Block::Heading { level: 2, text: "Title".into() },
    Block::Paragraph { text: "Body text".into() },
])]
#[case("* a\n* b\n* c", vec![
    Block::List { items: vec!["a".into(), "b".into(), "c".into()] },
])]
#[case("1. Point\nDetail here", vec![
    Block::NumberedPoint { label: "1. Point".into(), text: "Detail here".into() },
])]
#[case("1. Lonely point", vec![
    Block::NumberedPoint { label: "1. Lonely point".into(), text: String::new() },
])]
fn flat_examples(#[case] content: &str, #[case] expected: Vec<Block>) {
    assert_eq!(format(content, RenderMode::Flat), expected);
}

#[test]
fn flat_is_lazy_and_matches_eager_output() {
    let content = "## A\n\nb\n\n> c";
    let mut lazy = format_flat(content);
    assert_eq!(
        lazy.next(),
        Some(Block::Heading {
            level: 2,
            text: "A".into()
        })
    );
    let rest: Vec<_> = lazy.collect();
    assert_eq!(rest, format(content, RenderMode::Flat)[1..].to_vec());
}

#[test]
fn unclosed_fence_swallows_the_rest() {
    let blocks = format("Intro\n\n```rust\nfn a() {}\n\n## not a heading", RenderMode::Flat);
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph {
                text: "Intro".into()
            },
            Block::CodeBlock {
                text: "fn a() {}\n\n## not a heading".into(),
                language: Some("rust".into())
            },
        ]
    );
}

#[test]
fn sectioned_introduction_example() {
    assert_eq!(
        format("Title\n\nA quote\n\nBody para", RenderMode::Sectioned),
        vec![
            Block::Heading {
                level: 1,
                text: "Title".into()
            },
            Block::Quote {
                text: "A quote".into()
            },
            Block::Paragraph {
                text: "Body para".into()
            },
        ]
    );
}

#[test]
fn sectioned_document_starting_with_a_boundary_has_no_introduction() {
    let blocks = format("## First\nbody", RenderMode::Sectioned);
    assert_eq!(
        blocks[0],
        Block::SectionBreak {
            title: "First".into(),
            index: 0
        }
    );
}

#[rstest]
#[case("flat", RenderMode::Flat)]
#[case("Sectioned", RenderMode::Sectioned)]
#[case(" FLAT ", RenderMode::Flat)]
fn parses_render_mode(#[case] input: &str, #[case] expected: RenderMode) {
    assert_eq!(input.parse::<RenderMode>().unwrap(), expected);
}

#[test]
fn rejects_unknown_render_mode() {
    let err = "fancy".parse::<RenderMode>().unwrap_err();
    assert!(err.to_string().contains("fancy"));
}

#[test]
fn render_mode_display_round_trips() {
    for mode in RenderMode::ALL {
        assert_eq!(mode.to_string().parse::<RenderMode>().unwrap(), mode);
    }
}
