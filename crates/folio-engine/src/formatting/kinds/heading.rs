/// Heading block type with owned delimiter constants.
///
/// All heading syntax knowledge lives here; the classifier only asks
/// whether a segment opens a heading and for its stripped text.
pub struct Heading;

impl Heading {
    /// Level-2 heading marker.
    pub const H2: &'static str = "##";
    /// Level-3 heading marker. Checked before [`Heading::H2`] since it shares its prefix.
    pub const H3: &'static str = "###";

    /// Returns the heading level a segment opens, if any.
    pub fn level(segment: &str) -> Option<u8> {
        if segment.starts_with(Self::H3) {
            Some(3)
        } else if segment.starts_with(Self::H2) {
            Some(2)
        } else {
            None
        }
    }

    /// Strips the marker for `level` and the whitespace that follows it.
    pub fn strip(segment: &str, level: u8) -> &str {
        let marker = if level >= 3 { Self::H3 } else { Self::H2 };
        segment
            .strip_prefix(marker)
            .unwrap_or(segment)
            .trim_start_matches([' ', '\t'])
    }
}
