macro_rules! api_path {
    ($path:literal) => {
        concat!("/api", $path)
    };
}

/// Root prefix every list endpoint lives under.
pub const ROOT: &str = "/api";

/// Paged, searched, custom-ordered item listing (`GET`).
pub const ITEMS: &str = api_path!("/items");

/// Global selection replacement (`POST`).
pub const SELECTED: &str = api_path!("/selected");

/// Custom order replacement (`POST`).
pub const ORDER: &str = api_path!("/order");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_share_the_api_root() {
        for path in [ITEMS, SELECTED, ORDER] {
            assert!(path.starts_with(ROOT));
        }
        assert_eq!(ITEMS, "/api/items");
        assert_eq!(SELECTED, "/api/selected");
        assert_eq!(ORDER, "/api/order");
    }
}
