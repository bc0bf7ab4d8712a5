use serde::{Deserialize, Serialize};

/// One classified unit of formatted content.
///
/// Blocks carry no identity beyond their position in the formatter output;
/// renderers map each variant to exactly one visual element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A heading. Flat mode emits levels 2 and 3, the sectioned introduction emits level 1.
    Heading { level: u8, text: String },
    /// Plain text, rendered verbatim.
    Paragraph { text: String },
    /// A bulleted list, one entry per source line.
    List { items: Vec<String> },
    /// A bold label line followed by its explanatory text.
    NumberedPoint { label: String, text: String },
    /// Fenced code with the fences removed.
    CodeBlock {
        text: String,
        /// Tag found after the opening fence, if any (```` ```rust ````).
        language: Option<String>,
    },
    Quote { text: String },
    /// Start of a numbered section in sectioned mode. `index` is 0-based.
    SectionBreak { title: String, index: usize },
    Subheading { text: String },
}

impl Block {
    /// Short name of the variant, used by renderers and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::NumberedPoint { .. } => "numbered_point",
            Block::CodeBlock { .. } => "code_block",
            Block::Quote { .. } => "quote",
            Block::SectionBreak { .. } => "section_break",
            Block::Subheading { .. } => "subheading",
        }
    }

    /// The text fragments carried by this block, in source order, without markup.
    pub fn text_fragments(&self) -> Vec<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::CodeBlock { text, .. }
            | Block::Quote { text }
            | Block::Subheading { text } => vec![text.as_str()],
            Block::List { items } => items.iter().map(String::as_str).collect(),
            Block::NumberedPoint { label, text } => vec![label.as_str(), text.as_str()],
            Block::SectionBreak { title, .. } => vec![title.as_str()],
        }
    }

    /// Plain text of the whole block, fragments joined by newlines.
    pub fn plain_text(&self) -> String {
        self.text_fragments()
            .into_iter()
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_fragments_are_items() {
        let block = Block::List {
            items: vec!["a".into(), "b".into()],
        };
        assert_eq!(block.text_fragments(), vec!["a", "b"]);
        assert_eq!(block.plain_text(), "a\nb");
    }

    #[test]
    fn numbered_point_without_text_has_no_trailing_newline() {
        let block = Block::NumberedPoint {
            label: "1. Point".into(),
            text: String::new(),
        };
        assert_eq!(block.plain_text(), "1. Point");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let block = Block::Heading {
            level: 2,
            text: "Title".into(),
        };
        let toml = toml::to_string(&block).unwrap();
        assert!(toml.contains("kind = \"heading\""));
        assert!(toml.contains("level = 2"));
    }
}
