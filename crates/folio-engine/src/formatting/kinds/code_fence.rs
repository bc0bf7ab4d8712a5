/// Fenced code block type.
///
/// Fences are raw zones: the segmenter keeps a fenced block together across
/// blank lines, and nothing inside it is classified.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether a line (ignoring indentation) is a fence opener or closer.
    pub fn is_fence(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }

    /// Whether a fence line both opens and closes the block (```` ```code``` ````).
    pub fn closes_inline(line: &str) -> bool {
        let t = line.trim();
        t.len() > 2 * Self::BACKTICKS.len()
            && t.starts_with(Self::BACKTICKS)
            && t.ends_with(Self::BACKTICKS)
    }

    /// Language tag following the opening fence, if any.
    pub fn language(open_line: &str) -> Option<String> {
        let tag = open_line
            .trim()
            .strip_prefix(Self::BACKTICKS)?
            .trim_start_matches('`')
            .trim();
        (!tag.is_empty()).then(|| tag.to_string())
    }

    /// Removes the opening fence line and the closing fence, returning (code, language).
    ///
    /// A missing closing fence is tolerated: the code runs to the end of the segment.
    /// Lines after the closing fence are kept as part of the code.
    pub fn strip(segment: &str) -> (String, Option<String>) {
        let (open_line, body) = match segment.split_once('\n') {
            Some((open, body)) => (open, body),
            None if Self::closes_inline(segment) => {
                let t = segment.trim();
                let inner = &t[Self::BACKTICKS.len()..t.len() - Self::BACKTICKS.len()];
                return (inner.trim().to_string(), None);
            }
            None => (segment, ""),
        };

        let mut lines: Vec<&str> = body.lines().collect();
        if let Some(close) = lines.iter().position(|line| Self::is_fence(line)) {
            lines.remove(close);
        }

        (lines.join("\n"), Self::language(open_line))
    }
}
