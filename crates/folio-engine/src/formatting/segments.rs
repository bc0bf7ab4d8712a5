use super::kinds::CodeFence;

/// Splits raw content into blank-line-delimited segments.
///
/// A line is blank when it holds only whitespace. Runs of blank lines count as
/// one boundary, and each segment is trimmed; empty segments are never yielded.
///
/// When fence tracking is on, a segment that opens with a code fence is a raw
/// zone: it extends across blank lines up to its closing fence, or to the end
/// of the content when the fence is never closed. Lines after the closing
/// fence stay in the segment until the next blank line.
pub struct Segments<'a> {
    lines: std::str::Lines<'a>,
    track_fences: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Fence,
}

impl<'a> Segments<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            track_fences: false,
        }
    }

    /// Segments with fenced code kept together across blank lines.
    pub fn fenced(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            track_fences: true,
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut buf: Vec<&str> = Vec::new();
        let mut state = State::Text;

        for line in self.lines.by_ref() {
            match state {
                State::Fence => {
                    buf.push(line);
                    if CodeFence::is_fence(line) {
                        state = State::Text;
                    }
                }
                State::Text if line.trim().is_empty() => {
                    if !buf.is_empty() {
                        break;
                    }
                }
                State::Text => {
                    if self.track_fences && buf.is_empty() && CodeFence::is_fence(line) {
                        buf.push(line);
                        if CodeFence::closes_inline(line) {
                            break;
                        }
                        state = State::Fence;
                    } else {
                        buf.push(line);
                    }
                }
            }
        }

        if buf.is_empty() {
            return None;
        }
        Some(buf.join("\n").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(content: &str) -> Vec<String> {
        Segments::fenced(content).collect()
    }

    #[test]
    fn empty_content_has_no_segments() {
        assert!(collect("").is_empty());
        assert!(collect("\n\n  \n").is_empty());
    }

    #[test]
    fn splits_on_blank_lines() {
        assert_eq!(collect("one\n\ntwo\n\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn runs_of_blank_lines_are_one_boundary() {
        assert_eq!(collect("one\n\n\n\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        assert_eq!(collect("one\n   \ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(collect("  padded  \n\n\tnext"), vec!["padded", "next"]);
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(collect("one\r\n\r\ntwo\r\n"), vec!["one", "two"]);
    }

    #[test]
    fn fence_spans_blank_lines() {
        assert_eq!(
            collect("```\na\n\nb\n```\n\nafter"),
            vec!["```\na\n\nb\n```", "after"]
        );
    }

    #[test]
    fn text_after_closing_fence_stays_in_segment() {
        assert_eq!(
            collect("```\ncode\n```\nafter\n\nnext"),
            vec!["```\ncode\n```\nafter", "next"]
        );
    }

    #[test]
    fn fence_reopened_after_close_is_plain_text() {
        assert_eq!(
            collect("```\na\n```\n```\n\nb"),
            vec!["```\na\n```\n```", "b"]
        );
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        assert_eq!(
            collect("```\na\n\nb\n\nc"),
            vec!["```\na\n\nb\n\nc"]
        );
    }

    #[test]
    fn one_line_fence_does_not_open_a_raw_zone() {
        assert_eq!(
            collect("```ls -la```\n\nnext"),
            vec!["```ls -la```", "next"]
        );
    }

    #[test]
    fn fence_inside_paragraph_is_plain_text() {
        assert_eq!(
            collect("text\n```\n\nmore"),
            vec!["text\n```", "more"]
        );
    }

    #[test]
    fn untracked_fences_split_on_blank_lines() {
        let segments: Vec<_> = Segments::new("```\na\n\nb\n```").collect();
        assert_eq!(segments, vec!["```\na", "b\n```"]);
    }
}
