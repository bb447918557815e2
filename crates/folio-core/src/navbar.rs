//! Scroll threshold for the navigation bar.

/// Whether the navbar should be visible at `scroll_y`.
///
/// The bar shows once the page has scrolled strictly past `ratio` of the
/// hero section's rendered height. Exactly at the threshold it stays hidden.
#[must_use]
pub fn navbar_visible(scroll_y: f64, hero_height: f64, ratio: f64) -> bool {
    scroll_y > hero_height * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_top() {
        assert!(!navbar_visible(0.0, 1000.0, 0.7));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        assert!(!navbar_visible(700.0, 1000.0, 0.7));
        assert!(navbar_visible(700.5, 1000.0, 0.7));
    }

    #[test]
    fn test_hidden_again_after_scrolling_back() {
        assert!(navbar_visible(900.0, 1000.0, 0.7));
        assert!(!navbar_visible(300.0, 1000.0, 0.7));
    }

    #[test]
    fn test_zero_height_hero_shows_on_any_scroll() {
        assert!(!navbar_visible(0.0, 0.0, 0.7));
        assert!(navbar_visible(1.0, 0.0, 0.7));
    }
}
