/// Paragraph block type.
///
/// Paragraphs have no delimiters: they are what a segment becomes when no
/// other block opener matches, and their text is kept verbatim.
pub struct Paragraph;

impl Paragraph {
    /// Separator placed between merged segments.
    pub const SEPARATOR: &'static str = "\n\n";

    /// Paragraph text for a single segment.
    pub fn text(segment: &str) -> String {
        segment.to_string()
    }

    /// Merges several segments into one paragraph, keeping their blank-line breaks.
    pub fn merge(segments: &[String]) -> String {
        segments.join(Self::SEPARATOR)
    }
}
