/// Numbered point block type: a `1.`-style label line followed by its text.
pub struct NumberedPoint;

impl NumberedPoint {
    pub const SEPARATOR: u8 = b'.';

    /// A single ASCII digit followed by a dot opens a numbered point.
    pub fn opens(segment: &str) -> bool {
        let b = segment.as_bytes();
        b.len() >= 2 && b[0].is_ascii_digit() && b[1] == Self::SEPARATOR
    }

    /// Splits a segment into (label, text). Text is empty when there is no second line.
    pub fn split(segment: &str) -> (&str, &str) {
        match segment.split_once('\n') {
            Some((label, text)) => (label.trim_end(), text.trim()),
            None => (segment.trim_end(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_digit_dot() {
        assert!(NumberedPoint::opens("1. Point"));
        assert!(NumberedPoint::opens("9.Tight"));
    }

    #[test]
    fn multi_digit_numbers_do_not_open() {
        assert!(!NumberedPoint::opens("10. Point"));
    }

    #[test]
    fn digit_without_dot_does_not_open() {
        assert!(!NumberedPoint::opens("2024 was a year"));
        assert!(!NumberedPoint::opens("7"));
    }

    #[test]
    fn split_two_lines() {
        assert_eq!(
            NumberedPoint::split("1. Point\nDetail here"),
            ("1. Point", "Detail here")
        );
    }

    #[test]
    fn split_single_line_has_empty_text() {
        assert_eq!(NumberedPoint::split("1. Point"), ("1. Point", ""));
    }

    #[test]
    fn split_keeps_extra_lines_in_text() {
        assert_eq!(
            NumberedPoint::split("1. Point\nfirst\nsecond"),
            ("1. Point", "first\nsecond")
        );
    }
}
