use regex::Regex;
use std::sync::LazyLock;

// 依序嘗試，第一個命中的為準
static ASIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"/dp/([A-Z0-9]{10})",
        r"/product/([A-Z0-9]{10})",
        r"/gp/product/([A-Z0-9]{10})",
        r"asin=([A-Z0-9]{10})",
        r"ASIN=([A-Z0-9]{10})",
        // 沒有 /dp/ 的商品網址，例如 amazon.in/<slug>/<ASIN>/ref=...
        r"amazon\.[a-z\.]+/.*?/([A-Z0-9]{10})/",
        r"amazon\.[a-z\.]+.*?/([A-Z0-9]{10})(?:/|$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("ASIN pattern is valid"))
    .collect()
});

/// Pulls the 10-character ASIN out of an Amazon product URL.
pub fn extract_asin(url: &str) -> Option<String> {
    ASIN_PATTERNS.iter().find_map(|re| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_dp_url() {
        assert_eq!(
            extract_asin("https://www.amazon.in/Samsung-Galaxy/dp/B0CS5XW6TN/ref=sr_1_1?th=1"),
            Some("B0CS5XW6TN".to_string())
        );
    }

    #[test]
    fn test_extract_from_gp_product_and_query() {
        assert_eq!(
            extract_asin("https://www.amazon.in/gp/product/B09G9HD6PD"),
            Some("B09G9HD6PD".to_string())
        );
        assert_eq!(
            extract_asin("https://www.amazon.in/s?ASIN=B08N5WRWNW&tag=x"),
            Some("B08N5WRWNW".to_string())
        );
        assert_eq!(
            extract_asin("https://track.example/?asin=B08N5WRWNW"),
            Some("B08N5WRWNW".to_string())
        );
    }

    #[test]
    fn test_extract_from_slug_url_without_dp() {
        assert_eq!(
            extract_asin("https://www.amazon.in/Redmi-13C-Starshine-Green/B0CHX1W1XY/ref=sr_1_3"),
            Some("B0CHX1W1XY".to_string())
        );
        assert_eq!(
            extract_asin("https://www.amazon.com/Samsung-Galaxy/B0CS5XW6TN"),
            Some("B0CS5XW6TN".to_string())
        );
        assert_eq!(
            extract_asin("https://www.amazon.co.uk/Pixel-8/B0CGTD5KVS/"),
            Some("B0CGTD5KVS".to_string())
        );
    }

    #[test]
    fn test_dp_pattern_wins_over_slug_pattern() {
        assert_eq!(
            extract_asin("https://www.amazon.in/AAAAAAAAAA/dp/B09G9HD6PD"),
            Some("B09G9HD6PD".to_string())
        );
    }

    #[test]
    fn test_no_asin() {
        assert_eq!(extract_asin("https://www.flipkart.com/item/abc"), None);
        assert_eq!(extract_asin("https://www.amazon.in/dp/b0cs5xw6tn"), None);
        assert_eq!(extract_asin(""), None);
    }
}
