/// Bulleted list block type.
///
/// A list segment is any segment whose first character is the marker; every
/// line of the segment becomes one item.
pub struct BulletList;

impl BulletList {
    pub const MARKER: char = '*';

    pub fn opens(segment: &str) -> bool {
        segment.starts_with(Self::MARKER)
    }

    /// Splits a list segment into its items, dropping lines that are only a marker.
    pub fn items(segment: &str) -> Vec<String> {
        segment
            .lines()
            .map(Self::strip_item)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn strip_item(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::MARKER)
            .map(|rest| rest.trim_start())
            .unwrap_or(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_items() {
        assert_eq!(BulletList::items("* a\n* b\n* c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn lines_without_marker_are_items_too() {
        assert_eq!(
            BulletList::items("* first\ncontinued"),
            vec!["first", "continued"]
        );
    }

    #[test]
    fn marker_without_space() {
        assert_eq!(BulletList::items("*tight"), vec!["tight"]);
    }

    #[test]
    fn bare_marker_lines_are_dropped() {
        assert_eq!(BulletList::items("* a\n*\n* b"), vec!["a", "b"]);
    }

    #[test]
    fn opens_only_on_leading_marker() {
        assert!(BulletList::opens("* item"));
        assert!(!BulletList::opens("text * not a list"));
    }
}
