use regex::Regex;
use std::sync::OnceLock;

/// Subheading block type, only produced inside sections in sectioned mode.
///
/// A subheading is a bare short line: it starts with an upper-case letter and
/// contains nothing but word characters and spaces (no terminal punctuation).
pub struct Subheading;

impl Subheading {
    pub fn matches(group: &str) -> bool {
        static SUBHEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = SUBHEADING_REGEX
            .get_or_init(|| Regex::new(r"^\p{Lu}[\w ]*$").expect("Invalid subheading regex"));
        re.is_match(group)
    }
}
