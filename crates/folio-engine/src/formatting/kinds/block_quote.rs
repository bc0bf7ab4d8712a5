/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(segment: &str) -> bool {
        segment.starts_with(Self::PREFIX)
    }

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }

        // Only consume leading spaces when at least one prefix was found.
        if depth == 0 { (0, 0) } else { (depth, i) }
    }

    /// Quote text with every line's prefixes removed.
    pub fn strip(segment: &str) -> String {
        segment
            .lines()
            .map(|line| {
                let (_, idx) = Self::strip_prefixes(line);
                &line[idx..]
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, 0));
    }

    #[test]
    fn strip_no_quote_keeps_indentation() {
        assert_eq!(BlockQuote::strip_prefixes("  hello"), (0, 0));
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, 2));
    }

    #[test]
    fn strip_double_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, 4));
    }

    #[test]
    fn strip_nested_quote_no_space() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, 3));
    }

    #[test]
    fn strip_multiline_segment() {
        assert_eq!(
            BlockQuote::strip("> first line\n> second line"),
            "first line\nsecond line"
        );
    }

    #[test]
    fn continuation_lines_without_prefix_are_kept() {
        assert_eq!(BlockQuote::strip("> quoted\nlazy"), "quoted\nlazy");
    }
}
