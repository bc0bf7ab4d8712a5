//! Sectioned mode: an introduction followed by numbered sections.

use regex::Regex;
use std::sync::OnceLock;

use super::{
    kinds::{BlockQuote, Paragraph, Subheading},
    segments::Segments,
    types::Block,
};

fn boundary_regex() -> &'static Regex {
    static BOUNDARY_REGEX: OnceLock<Regex> = OnceLock::new();
    BOUNDARY_REGEX
        .get_or_init(|| Regex::new(r"(?im)\bchapter\b|^##").expect("Invalid section boundary regex"))
}

/// Byte offsets where sections start.
///
/// A boundary is the word "chapter" in any case, or `##` at the start of a
/// line. Each boundary snaps to the start of its line, and a line holding
/// several boundaries starts only one section.
pub fn boundaries(content: &str) -> Vec<usize> {
    let mut starts: Vec<usize> = Vec::new();
    for m in boundary_regex().find_iter(content) {
        let line_start = content[..m.start()].rfind('\n').map_or(0, |i| i + 1);
        if starts.last() != Some(&line_start) {
            starts.push(line_start);
        }
    }
    starts
}

/// Formats content in sectioned mode.
///
/// Without any boundary the whole content is treated as the introduction.
pub fn format_sectioned(content: &str) -> Vec<Block> {
    let starts = boundaries(content);
    let Some(&first) = starts.first() else {
        return introduction(content);
    };

    let mut blocks = introduction(&content[..first]);
    for (index, &start) in starts.iter().enumerate() {
        let end = starts.get(index + 1).copied().unwrap_or(content.len());
        blocks.extend(section(&content[start..end], index));
    }
    blocks
}

/// Introduction: title heading, lead quotation, then everything else as one paragraph.
pub fn introduction(text: &str) -> Vec<Block> {
    let mut groups = Segments::new(text);
    let mut blocks = Vec::new();

    if let Some(title) = groups.next() {
        blocks.push(Block::Heading {
            level: 1,
            text: title.trim_start_matches('#').trim_start().to_string(),
        });
    }

    if let Some(quote) = groups.next() {
        blocks.push(Block::Quote {
            text: BlockQuote::strip(&quote),
        });
    }

    let rest: Vec<String> = groups.collect();
    if !rest.is_empty() {
        blocks.push(Block::Paragraph {
            text: Paragraph::merge(&rest),
        });
    }

    blocks
}

/// One section: a [`Block::SectionBreak`] followed by its body.
///
/// The body is only split into subheadings and paragraphs; lists, code and
/// quotes inside a section stay paragraph text.
pub fn section(text: &str, index: usize) -> Vec<Block> {
    let (first_line, body) = text.split_once('\n').unwrap_or((text, ""));
    let title = first_line.trim().trim_start_matches('#').trim();
    let title = if title.is_empty() {
        format!("Section {index}")
    } else {
        title.to_string()
    };

    let mut blocks = vec![Block::SectionBreak { title, index }];
    blocks.extend(Segments::new(body).map(|group| {
        if Subheading::matches(&group) {
            Block::Subheading { text: group }
        } else {
            Block::Paragraph {
                text: Paragraph::text(&group),
            }
        }
    }));
    blocks
}
