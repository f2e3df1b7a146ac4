/// Fraction of the scroll height past which the next page is requested.
pub const LOAD_MORE_THRESHOLD: f64 = 0.8;

/// Scroll container geometry at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, client_height: f64, scroll_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
            scroll_height,
        }
    }

    /// Container scrolled all the way down.
    pub fn at_bottom(client_height: f64, scroll_height: f64) -> Self {
        Self::new((scroll_height - client_height).max(0.0), client_height, scroll_height)
    }

    /// True once the visible bottom edge is past the load-more threshold.
    pub fn past_threshold(&self) -> bool {
        self.scroll_top + self.client_height
            > self.scroll_height * LOAD_MORE_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater() {
        assert!(!ScrollMetrics::new(300.0, 500.0, 1000.0).past_threshold());
        assert!(ScrollMetrics::new(301.0, 500.0, 1000.0).past_threshold());
        assert!(ScrollMetrics::at_bottom(500.0, 1000.0).past_threshold());
        assert!(!ScrollMetrics::new(0.0, 200.0, 1000.0).past_threshold());
    }
}
