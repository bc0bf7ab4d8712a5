//! Reading progress through a long post.

/// Fraction of the page scrolled past, from 0 to 1.
///
/// A page no taller than the viewport cannot scroll and reads as 0.
pub fn reading_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scroll_y.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 2000.0, 800.0, 0.0)]
    #[case(600.0, 2000.0, 800.0, 0.5)]
    #[case(1200.0, 2000.0, 800.0, 1.0)]
    #[case(1500.0, 2000.0, 800.0, 1.0)]
    #[case(-40.0, 2000.0, 800.0, 0.0)]
    fn fraction_of_scrollable_height(
        #[case] scroll_y: f64,
        #[case] scroll_height: f64,
        #[case] viewport_height: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(reading_progress(scroll_y, scroll_height, viewport_height), expected);
    }

    #[rstest]
    #[case(0.0, 800.0, 800.0)]
    #[case(10.0, 600.0, 800.0)]
    #[case(f64::NAN, 2000.0, 800.0)]
    #[case(0.0, 0.0, 0.0)]
    fn pages_that_cannot_scroll_read_as_zero(
        #[case] scroll_y: f64,
        #[case] scroll_height: f64,
        #[case] viewport_height: f64,
    ) {
        assert_eq!(reading_progress(scroll_y, scroll_height, viewport_height), 0.0);
    }
}
