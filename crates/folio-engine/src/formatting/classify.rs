use super::{
    kinds::{BlockQuote, BulletList, CodeFence, Heading, NumberedPoint, Paragraph},
    types::Block,
};

/// Classifies one flat-mode segment into exactly one [`Block`].
///
/// Openers are tried in a fixed priority order and the first match wins:
/// level-2 heading, level-3 heading, list, numbered point, code fence, quote.
/// Anything else is a paragraph.
pub struct SegmentClassifier;

impl SegmentClassifier {
    pub fn classify(&self, segment: &str) -> Block {
        if let Some(level) = Heading::level(segment) {
            return Block::Heading {
                level,
                text: Heading::strip(segment, level).to_string(),
            };
        }

        if BulletList::opens(segment) {
            return Block::List {
                items: BulletList::items(segment),
            };
        }

        if NumberedPoint::opens(segment) {
            let (label, text) = NumberedPoint::split(segment);
            return Block::NumberedPoint {
                label: label.to_string(),
                text: text.to_string(),
            };
        }

        if segment.starts_with(CodeFence::BACKTICKS) {
            let (text, language) = CodeFence::strip(segment);
            return Block::CodeBlock { text, language };
        }

        if BlockQuote::opens(segment) {
            return Block::Quote {
                text: BlockQuote::strip(segment),
            };
        }

        Block::Paragraph {
            text: Paragraph::text(segment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paragraph(text: &str) -> Block {
        Block::Paragraph { text: text.into() }
    }

    #[rstest]
    #[case("## Title", Block::Heading { level: 2, text: "Title".into() })]
    #[case("### Sub", Block::Heading { level: 3, text: "Sub".into() })]
    #[case("* a\n* b", Block::List { items: vec!["a".into(), "b".into()] })]
    #[case("1. Point\nDetail", Block::NumberedPoint { label: "1. Point".into(), text: "Detail".into() })]
    #[case("```sh\nls\n```", Block::CodeBlock { text: "ls".into(), language: Some("sh".into()) })]
    #[case("> Wise words", Block::Quote { text: "Wise words".into() })]
    #[case("Just text.", paragraph("Just text."))]
    fn classifies_each_opener(#[case] segment: &str, #[case] expected: Block) {
        assert_eq!(SegmentClassifier.classify(segment), expected);
    }

    #[test]
    fn heading_keeps_following_lines() {
        assert_eq!(
            SegmentClassifier.classify("## Title\nwith a tail"),
            Block::Heading {
                level: 2,
                text: "Title\nwith a tail".into()
            }
        );
    }

    #[test]
    fn emphasis_at_start_reads_as_list() {
        // `*` is checked before anything else once headings are ruled out.
        assert!(matches!(
            SegmentClassifier.classify("*really* important"),
            Block::List { .. }
        ));
    }

    #[test]
    fn list_marker_wins_over_quote_lines() {
        assert_eq!(
            SegmentClassifier.classify("* item\n> quoted"),
            Block::List {
                items: vec!["item".into(), "> quoted".into()]
            }
        );
    }

    #[test]
    fn numbered_point_wins_over_later_fence() {
        assert_eq!(
            SegmentClassifier.classify("1. Run\n```"),
            Block::NumberedPoint {
                label: "1. Run".into(),
                text: "```".into()
            }
        );
    }

    #[test]
    fn markers_in_the_middle_are_paragraph_text() {
        assert_eq!(
            SegmentClassifier.classify("See ## and > and * here"),
            paragraph("See ## and > and * here")
        );
    }

    #[test]
    fn single_hash_is_a_paragraph() {
        assert_eq!(SegmentClassifier.classify("# Big"), paragraph("# Big"));
    }
}
